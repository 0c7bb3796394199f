use yew::prelude::*;

use crate::settings;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let api_host = settings::get_settings().api_host;

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="taxdash-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ props.title.clone() }</h1>
            </div>
            <div class="flex-none px-4">
                <span class="badge badge-ghost" title="API host">
                    <i class="fas fa-server mr-2"></i>{ api_host }
                </span>
            </div>
        </div>
    }
}
