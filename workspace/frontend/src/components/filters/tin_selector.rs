use std::ops::Range;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};
use yew::prelude::*;

/// Height of the list viewport in pixels
pub const VIEWPORT_HEIGHT: i32 = 200;
/// Height of one TIN row in pixels
pub const ROW_HEIGHT: i32 = 35;
const OVERSCAN: usize = 2;

/// Rows to render for a list scrolled to `scroll_top`.
pub fn visible_rows(scroll_top: i32, row_count: usize) -> Range<usize> {
    let first = (scroll_top.max(0) / ROW_HEIGHT) as usize;
    let visible = (VIEWPORT_HEIGHT / ROW_HEIGHT) as usize + 1;
    let start = first.min(row_count);
    let end = (first + visible + OVERSCAN).min(row_count);
    start..end
}

#[derive(Properties, PartialEq)]
pub struct TinSelectorProps {
    pub tins: Vec<String>,
    pub selected: Option<String>,
    pub on_select: Callback<String>,
}

/// Dropdown of TINs with a virtualised list.
#[function_component(TinSelector)]
pub fn tin_selector(props: &TinSelectorProps) -> Html {
    let open = use_state(|| false);
    let scroll_top = use_state(|| 0);
    let container = use_node_ref();

    // Close on a mousedown outside the selector
    {
        let open = open.setter();
        use_effect_with(container.clone(), move |container| {
            let container = container.clone();
            let listener = Closure::<dyn Fn(web_sys::Event)>::wrap(Box::new(move |event: web_sys::Event| {
                let inside = match (container.cast::<Element>(), event.target()) {
                    (Some(element), Some(target)) => element.contains(target.dyn_ref::<Node>()),
                    _ => true,
                };
                if !inside {
                    open.set(false);
                }
            }));

            let document = web_sys::window().and_then(|window| window.document());
            if let Some(document) = &document {
                if let Err(err) = document
                    .add_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref())
                {
                    log::warn!("Failed to listen for outside clicks: {:?}", err);
                }
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback(
                        "mousedown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let on_scroll = {
        let scroll_top = scroll_top.clone();
        Callback::from(move |event: Event| {
            if let Some(element) = event.target_dyn_into::<Element>() {
                scroll_top.set(element.scroll_top());
            }
        })
    };

    let rows = visible_rows(*scroll_top, props.tins.len());
    let list_height = props.tins.len() as i32 * ROW_HEIGHT;

    html! {
        <div ref={container} class="relative w-64">
            <div
                class="input input-bordered flex items-center cursor-pointer select-none"
                onclick={on_toggle}
            >
                { props.selected.clone().unwrap_or_else(|| "Select TIN".to_string()) }
            </div>
            if *open {
                <div
                    class="absolute left-0 w-full z-10 mt-1 rounded-box border border-base-300 bg-base-100 shadow overflow-y-auto"
                    style={format!("top: 110%; height: {VIEWPORT_HEIGHT}px;")}
                    onscroll={on_scroll}
                >
                    <div class="relative" style={format!("height: {list_height}px;")}>
                        { for rows.map(|index| {
                            let tin = props.tins[index].clone();
                            let is_selected = props.selected.as_deref() == Some(tin.as_str());
                            let onclick = {
                                let open = open.clone();
                                let on_select = props.on_select.clone();
                                let tin = tin.clone();
                                Callback::from(move |_: MouseEvent| {
                                    log::debug!("Selected TIN {}", tin);
                                    on_select.emit(tin.clone());
                                    open.set(false);
                                })
                            };
                            html! {
                                <div
                                    key={tin.clone()}
                                    class={classes!("absolute", "left-0", "w-full", "px-3", "py-2", "cursor-pointer", is_selected.then_some("bg-base-300"))}
                                    style={format!("top: {}px; height: {ROW_HEIGHT}px;", index as i32 * ROW_HEIGHT)}
                                    {onclick}
                                >
                                    { tin }
                                </div>
                            }
                        }) }
                    </div>
                </div>
            }
        </div>
    }
}
