use common::period::year_options;
use common::Tenure;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TenureFilterProps {
    /// Years that have data, in display order
    pub years: Vec<i32>,
    pub value: Tenure,
    pub on_change: Callback<Tenure>,
}

/// Select of `All` followed by one option per available year.
#[function_component(TenureFilter)]
pub fn tenure_filter(props: &TenureFilterProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let tenure = Tenure::from_value(&select.value());
                log::debug!("Tenure changed to {:?}", tenure);
                on_change.emit(tenure);
            }
        })
    };

    let current = props.value.value();
    html! {
        <select class="select select-bordered" {onchange}>
            <option value={Tenure::ALL_VALUE} selected={current == Tenure::ALL_VALUE}>{"All"}</option>
            { for year_options(&props.years).into_iter().map(|option| html! {
                <option selected={current == option.value} value={option.value.clone()}>{option.label}</option>
            }) }
        </select>
    }
}
