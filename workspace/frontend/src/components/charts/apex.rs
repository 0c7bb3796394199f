use common::charts::{ChartConfig, FormatterKind, FormatterSlot};
use common::format::{employee_tooltip_html, format_currency, format_millions};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    type ApexCharts;

    #[wasm_bindgen(constructor, catch)]
    fn new(element: &Element, options: &JsValue) -> Result<ApexCharts, JsValue>;

    #[wasm_bindgen(method)]
    fn render(this: &ApexCharts) -> js_sys::Promise;

    #[wasm_bindgen(method)]
    fn destroy(this: &ApexCharts);
}

type Formatter = Closure<dyn Fn(JsValue) -> JsValue>;

/// A rendered chart and the Rust closures its options call into.
struct MountedChart {
    chart: ApexCharts,
    _formatters: Vec<Formatter>,
}

impl MountedChart {
    fn destroy(self) {
        self.chart.destroy();
    }
}

fn property(target: &JsValue, path: &[&str]) -> JsValue {
    path.iter().fold(target.clone(), |value, key| {
        js_sys::Reflect::get(&value, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
    })
}

fn index(target: &JsValue, position: u32) -> JsValue {
    js_sys::Reflect::get_u32(target, position).unwrap_or(JsValue::UNDEFINED)
}

fn employee_tooltip(context: &JsValue) -> JsValue {
    let point = property(context, &["dataPointIndex"]).as_f64().unwrap_or(0.0) as u32;
    let series = property(context, &["series"]);
    let month = index(&property(context, &["w", "globals", "categoryLabels"]), point)
        .as_string()
        .unwrap_or_default();
    let payroll = index(&index(&series, 0), point).as_f64().unwrap_or(0.0);
    let paid_swt = index(&index(&series, 1), point).as_f64().unwrap_or(0.0);
    JsValue::from_str(&employee_tooltip_html(&month, payroll, paid_swt))
}

fn formatter(kind: FormatterKind) -> Formatter {
    let function: Box<dyn Fn(JsValue) -> JsValue> = match kind {
        FormatterKind::Currency => Box::new(|value: JsValue| match value.as_f64() {
            Some(amount) => JsValue::from_str(&format_currency(amount)),
            None => value,
        }),
        FormatterKind::Millions => Box::new(|value: JsValue| match value.as_f64() {
            Some(amount) => JsValue::from_str(&format_millions(amount)),
            None => value,
        }),
        FormatterKind::EmployeeTooltip => Box::new(|context: JsValue| employee_tooltip(&context)),
    };
    Closure::wrap(function)
}

/// Sets `function` at `slot.path`, creating missing parent objects.
fn install(options: &JsValue, slot: &FormatterSlot, function: &JsValue) -> Result<(), JsValue> {
    let Some((last, parents)) = slot.path.split_last() else {
        return Ok(());
    };

    let mut target = options.clone();
    for key in parents {
        let key = JsValue::from_str(key);
        let mut next = js_sys::Reflect::get(&target, &key)?;
        if !next.is_object() {
            next = js_sys::Object::new().into();
            js_sys::Reflect::set(&target, &key, &next)?;
        }
        target = next;
    }
    js_sys::Reflect::set(&target, &JsValue::from_str(last), function)?;
    Ok(())
}

fn mount_chart(element: &Element, config: &ChartConfig, series: &Value) -> Result<MountedChart, JsValue> {
    let mut options = config.options.clone();
    if let Value::Object(map) = &mut options {
        map.insert("series".to_string(), series.clone());
    }

    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let js_options = options.serialize(&serializer).map_err(JsValue::from)?;

    let mut formatters = Vec::with_capacity(config.formatters.len());
    for slot in &config.formatters {
        let function = formatter(slot.kind);
        install(&js_options, slot, function.as_ref())?;
        formatters.push(function);
    }

    let chart = ApexCharts::new(element, &js_options)?;
    let _ = chart.render();
    Ok(MountedChart {
        chart,
        _formatters: formatters,
    })
}

#[derive(Properties, PartialEq)]
pub struct ApexChartProps {
    pub config: ChartConfig,
    /// ApexCharts `series` value, e.g. `[{ "name": .., "data": [..] }]`
    pub series: Value,
}

/// Renders an ApexCharts chart; re-created whenever the options or series change.
#[function_component(ApexChart)]
pub fn apex_chart(props: &ApexChartProps) -> Html {
    let node = use_node_ref();

    use_effect_with(
        (node.clone(), props.config.clone(), props.series.clone()),
        |(node, config, series)| {
            let mounted = node.cast::<Element>().and_then(|element| {
                match mount_chart(&element, config, series) {
                    Ok(chart) => Some(chart),
                    Err(err) => {
                        log::error!("Failed to render chart: {:?}", err);
                        None
                    }
                }
            });
            move || {
                if let Some(chart) = mounted {
                    chart.destroy();
                }
            }
        },
    );

    let height = props.config.height().unwrap_or(350);
    html! {
        <div ref={node} class="chart-container" style={format!("min-height: {height}px;")}></div>
    }
}
