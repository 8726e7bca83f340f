use crate::domain::a001_product::ui::list::ProductBrowser;
use crate::domain::a002_selection::ui::list::SelectedProducts;
use crate::domain::a003_routine_chat::ui::RoutineChat;
use crate::session::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the session store to the whole app via context.
    let session = SessionContext::new();
    provide_context(session);

    // Load the catalog up front so a selection restored from storage
    // resolves to product names without waiting for a grid interaction.
    Effect::new(move |_| {
        session.ensure_catalog();
    });

    view! {
        <div class="page-wrapper">
            <header class="site-header">
                <h1>"Routine Builder"</h1>
            </header>
            <main>
                <ProductBrowser />
                <SelectedProducts />
                <RoutineChat />
            </main>
        </div>
    }
}
