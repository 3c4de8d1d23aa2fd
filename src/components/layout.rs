//! Page chrome wrapping every routed view.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::footer::Footer;
use crate::components::header::Header;

/// Header + routed content + footer.
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Header/>
            <main class="layout__content">
                <Outlet/>
            </main>
            <Footer/>
        </div>
    }
}
