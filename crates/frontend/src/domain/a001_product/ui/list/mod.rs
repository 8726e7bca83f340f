use crate::session::{use_session, CatalogState};
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_product::{filter_products, FilterOutcome, Product};
use leptos::prelude::*;

/// Fixed category list offered by the category select. Values match the
/// `category` field of the catalog resource exactly.
const CATEGORIES: [(&str, &str); 6] = [
    ("cleanser", "Cleansers"),
    ("moisturizer", "Moisturizers"),
    ("haircare", "Haircare"),
    ("makeup", "Makeup"),
    ("suncare", "Suncare"),
    ("fragrance", "Fragrance"),
];

const NO_QUERY_MESSAGE: &str = "Select a category or search for products";

/// Placeholder for a query that matched nothing. Distinct from the no-query
/// placeholder, and different again depending on whether a search term was
/// part of the query.
fn no_match_message(searched: Option<&str>) -> String {
    match searched {
        Some(term) => format!("No products found matching \"{term}\""),
        None => "No products found in this category".to_string(),
    }
}

fn grid_placeholder(text: &str) -> AnyView {
    view! { <div class="placeholder-message">{text.to_string()}</div> }.into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn ProductBrowser() -> impl IntoView {
    let ctx = use_session();
    let (category, set_category) = signal(String::new());
    let (search, set_search) = signal(String::new());

    view! {
        <section class="product-browser">
            <div class="browse-controls">
                <select
                    class="form-control"
                    on:change=move |ev| {
                        set_category.set(event_target_value(&ev));
                        ctx.ensure_catalog();
                    }
                >
                    <option value="">"Choose a category"</option>
                    {CATEGORIES.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
                <SearchInput
                    on_change=Callback::new(move |val: String| {
                        set_search.set(val);
                        ctx.ensure_catalog();
                    })
                    placeholder="Search products...".to_string()
                />
            </div>

            <div class="products-container">
                {move || {
                    let selected_category = category.get();
                    let term = search.get();
                    if selected_category.is_empty() && term.trim().is_empty() {
                        return grid_placeholder(NO_QUERY_MESSAGE);
                    }
                    match ctx.catalog.get() {
                        CatalogState::Idle | CatalogState::Loading => {
                            grid_placeholder("Loading products...")
                        }
                        CatalogState::Failed(_) => grid_placeholder(
                            "Products are unavailable right now. Please try again later.",
                        ),
                        CatalogState::Ready(products) => {
                            match filter_products(&products, &selected_category, &term) {
                                FilterOutcome::NoQuery => grid_placeholder(NO_QUERY_MESSAGE),
                                FilterOutcome::NoMatches { searched } => {
                                    grid_placeholder(&no_match_message(searched.as_deref()))
                                }
                                FilterOutcome::Matches(found) => view! {
                                    <div class="products-grid">
                                        {found.into_iter().map(|product| view! {
                                            <ProductCard product=product />
                                        }).collect_view()}
                                    </div>
                                }
                                .into_any(),
                            }
                        }
                    }
                }}
            </div>
        </section>
    }
}

/// One catalog card. The selected class derives from the session's
/// selection signal, so it is re-applied on every re-render of the grid;
/// the description toggle is presentation-only local state.
#[component]
#[allow(non_snake_case)]
fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_session();
    let (show_description, set_show_description) = signal(false);

    let card_class = {
        let id = product.id.clone();
        move || {
            if ctx.selection.get().contains(&id) {
                "product-card selected"
            } else {
                "product-card"
            }
        }
    };
    let toggle = {
        let id = product.id.clone();
        move |_| ctx.toggle_selected(&id)
    };

    view! {
        <div
            class=card_class
            tabindex="0"
            on:click=toggle
            on:mouseenter=move |_| set_show_description.set(true)
            on:mouseleave=move |_| set_show_description.set(false)
            on:focus=move |_| set_show_description.set(true)
            on:blur=move |_| set_show_description.set(false)
        >
            <img src=product.image.clone() alt=product.name.clone() />
            <div class="product-info">
                <div
                    class="product-details"
                    style=move || if show_description.get() { "display: none;" } else { "display: block;" }
                >
                    <h3>{product.name.clone()}</h3>
                    <p>{product.brand.clone()}</p>
                </div>
                <div
                    class="product-description"
                    style=move || if show_description.get() { "display: block;" } else { "display: none;" }
                >
                    <p>{product.description.clone()}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_match_messages_differ_by_query_kind() {
        assert_eq!(
            no_match_message(Some("serum")),
            "No products found matching \"serum\""
        );
        assert_eq!(no_match_message(None), "No products found in this category");
        assert_ne!(no_match_message(None), NO_QUERY_MESSAGE);
    }
}
