//! Command routing page: edits the path → command table behind `SH_ROUTES`.

use crate::config::ConfigStore;
use crate::error::AdminError;
use crate::markup::{el, Element};
use crate::pages::{PageContext, PageParams};
use crate::routes::{self, RouteTable};

/// Env-file key holding the shell-quoted route pairs.
pub const ROUTES_KEY: &str = "SH_ROUTES";

/// Extra blank rows rendered below the existing routes.
const BLANK_ROWS: usize = 1;

pub fn page(ctx: &PageContext, params: &PageParams) -> Result<Element, AdminError> {
    let mut store = ConfigStore::load(&ctx.env_file)?;

    if params.contains_key("submit") {
        let table = table_from_form(params);
        tracing::info!(routes = table.len(), "saving route table");
        store.set(ROUTES_KEY, routes::encode(&table));
        store.save()?;
    }

    let table = routes::decode(store.get(ROUTES_KEY).unwrap_or_default())?;

    let form = el("form").attr("method", "post").child(
        el("fieldset")
            .child(el("legend").child("Command routing"))
            .child(
                el("table")
                    .child(
                        el("thead").child(
                            el("tr")
                                .child(el("th").child("Path"))
                                .child(el("th").child("Command"))
                                .child(el("th").child("Run")),
                        ),
                    )
                    .child(el("tbody").children(rows(&table))),
            )
            .child(el("br"))
            .child(
                el("input")
                    .attr("type", "submit")
                    .attr("name", "submit")
                    .attr("value", "Save"),
            )
            .child(" ")
            .child(el("input").attr("type", "reset").attr("value", "Reset")),
    );

    Ok(el("section")
        .child(form)
        .child(el("p").child(format!("{} commands defined.", table.len()))))
}

/// One editable row per existing route, plus trailing blank rows for new
/// entries. Rows with a path also get a "Go" button that opens it.
fn rows(table: &RouteTable) -> Vec<Element> {
    let blanks = std::iter::repeat(("", "")).take(BLANK_ROWS);
    table
        .iter()
        .map(|(path, command)| (path.as_str(), command.as_str()))
        .chain(blanks)
        .enumerate()
        .map(|(i, (path, command))| {
            let run_cell = if path.is_empty() {
                el("td").child("-")
            } else {
                el("td").child(
                    el("input")
                        .attr("type", "button")
                        .attr("onclick", format!("window.open('{path}');"))
                        .attr("value", "Go"),
                )
            };
            el("tr")
                .child(
                    el("td").child(
                        el("input")
                            .attr("id", &format!("path_{i}"))
                            .attr("name", &format!("path_{i}"))
                            .attr("type", "text")
                            .attr("value", path),
                    ),
                )
                .child(
                    el("td").child(
                        el("input")
                            .attr("id", &format!("com_{i}"))
                            .attr("name", &format!("com_{i}"))
                            .attr("type", "text")
                            .attr("value", command)
                            .attr("size", "40"),
                    ),
                )
                .child(run_cell)
        })
        .collect()
}

/// Rebuild a route table from `path_<n>` / `com_<n>` form fields.
///
/// Path keys are processed in lexicographic order; rows with an empty path
/// are dropped together with their command.
fn table_from_form(params: &PageParams) -> RouteTable {
    let mut path_keys: Vec<&String> = params
        .keys()
        .filter(|key| key.starts_with("path_"))
        .collect();
    path_keys.sort();

    let mut table = RouteTable::new();
    for key in path_keys {
        let Some(path) = params.get(key.as_str()) else {
            continue;
        };
        if path.is_empty() {
            continue;
        }
        let suffix = &key["path_".len()..];
        let command = params
            .get(format!("com_{suffix}").as_str())
            .cloned()
            .unwrap_or_default();
        table.insert(path.clone(), command);
    }
    table
}
