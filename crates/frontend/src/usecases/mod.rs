pub mod u501_collect_order;
