use crate::session::use_session;
use contracts::domain::a002_selection::{resolve_rows, SelectedRow};
use leptos::prelude::*;

/// The selected-products panel: one row per selected id in selection order,
/// resolved against the catalog. Rows whose id does not resolve (filtered
/// out or catalog not loaded yet) are kept and labelled "Unknown". The
/// clear-all control only exists while the selection is non-empty; `Show`
/// mounts it once, so re-renders never duplicate it.
#[component]
#[allow(non_snake_case)]
pub fn SelectedProducts() -> impl IntoView {
    let ctx = use_session();

    view! {
        <section class="selected-products">
            <div class="selected-products-header">
                <h2>"Selected Products"</h2>
                <Show when=move || !ctx.selection.get().is_empty()>
                    <button
                        class="clear-all-btn"
                        title="Clear All Selected Products"
                        on:click=move |_| ctx.clear_selected()
                    >
                        "Clear All"
                    </button>
                </Show>
            </div>
            <div class="selected-products-list">
                {move || {
                    let rows = resolve_rows(&ctx.selection.get(), &ctx.products());
                    if rows.is_empty() {
                        view! {
                            <div class="placeholder-message">"No products selected"</div>
                        }
                        .into_any()
                    } else {
                        rows.into_iter()
                            .map(|row| view! { <SelectedProductItem row=row /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
#[allow(non_snake_case)]
fn SelectedProductItem(row: SelectedRow) -> impl IntoView {
    let ctx = use_session();
    let label = row.name.unwrap_or_else(|| "Unknown".to_string());
    let remove = {
        let id = row.id.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            ctx.remove_selected(&id);
        }
    };

    view! {
        <div class="selected-product-item">
            <span>{label}</span>
            <button class="remove-selected" title="Remove" on:click=remove>
                "\u{00d7}"
            </button>
        </div>
    }
}
