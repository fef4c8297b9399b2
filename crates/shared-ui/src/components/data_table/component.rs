use dioxus::prelude::*;

/// Horizontally scrollable table.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Wraps column headers in `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { scope: "col", {children} }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Full-width row shown when a table has nothing to list.
#[component]
pub fn DataTableEmpty(
    columns: usize,
    title: String,
    #[props(default)] hint: String,
) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{columns}",
                p { class: "data-table-empty-title", "{title}" }
                if !hint.is_empty() {
                    p { class: "data-table-empty-hint", "{hint}" }
                }
            }
        }
    }
}
