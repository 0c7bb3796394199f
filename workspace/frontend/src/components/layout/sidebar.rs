use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::settings;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let settings = settings::get_settings();
    let api_docs = format!(
        "{}://{}:{}/swagger-ui",
        if settings.api_use_https { "https" } else { "http" },
        settings.api_host,
        settings.api_port
    );

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="taxdash-drawer"></label>
            <ul class="menu p-4 w-72 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-file-invoice-dollar"></i>
                        </div>
                        <span class="text-2xl font-bold tracking-tight">{"TaxDash"}</span>
                    </div>
                </li>

                <li><Link<Route> to={Route::Compliance} classes="nav-link"><i class="fas fa-chart-line w-5"></i> {"Compliance"}</Link<Route>></li>

                <div class="divider"></div>

                <li><a class="nav-link" href={api_docs} target="_blank"><i class="fas fa-book w-5"></i> {"API Docs"}</a></li>
            </ul>
        </div>
    }
}
