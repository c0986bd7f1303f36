use contracts::domain::a001_order_line::{OrderSheet, RowSpec};
use leptos::prelude::*;

/// Renders every order line added to `sheet`, one `<tr>` per supplier.
#[component]
pub fn OrderLineRows(sheet: RwSignal<OrderSheet>) -> impl IntoView {
    view! {
        <For
            each=move || sheet.with(|s| s.lines().to_vec())
            key=|line| line.index
            children=move |line| {
                sheet
                    .with_untracked(|s| s.rows(&line))
                    .into_iter()
                    .map(|row| view! { <OrderLineRow row=row /> })
                    .collect_view()
            }
        />
    }
}

#[component]
fn OrderLineRow(row: RowSpec) -> impl IntoView {
    let class = row.class_attr();
    // only the first row of a line carries the shared quantity
    let amount = row.amount.map(|cell| {
        view! {
            <td class="amount" rowspan=cell.rowspan.to_string()>
                <input type="number" name=cell.name min=cell.min.to_string() />
            </td>
        }
    });

    view! {
        <tr class=class>
            <td class="supplier">
                <input type="radio" name=row.supplier_field value=row.supplier />
            </td>
            <td class="id">
                <input type="text" name=row.id_field />
            </td>
            <td class="name">
                <input type="text" name=row.name_field />
            </td>
            <td class="size">
                <input type="text" name=row.size_field />
            </td>
            {amount}
        </tr>
    }
}
