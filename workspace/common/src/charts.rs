//! ApexCharts option builders.
//!
//! Options are plain JSON with ApexCharts' own key names. Values that must be
//! JavaScript functions (axis formatters, custom tooltips) cannot be expressed
//! in JSON; each builder lists them as [`FormatterSlot`]s and the frontend
//! installs a function at every slot before handing the options over.

use serde_json::{Value, json};

use crate::sales::MONTH_ABBREVIATIONS;

const SALES_COMPARISON_COLORS: [&str; 4] = ["#008FFB", "#00E396", "#FEB019", "#FF4560"];

/// Function to install at a formatter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterKind {
    /// `format_currency` of the value.
    Currency,
    /// `format_millions` of the value.
    Millions,
    /// Radar tooltip built by `employee_tooltip_html`.
    EmployeeTooltip,
}

/// Location of a function-valued option, as a key path from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatterSlot {
    pub path: &'static [&'static str],
    pub kind: FormatterKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub options: Value,
    pub formatters: Vec<FormatterSlot>,
}

impl ChartConfig {
    pub fn chart_type(&self) -> Option<&str> {
        self.options.pointer("/chart/type").and_then(Value::as_str)
    }

    pub fn height(&self) -> Option<u64> {
        self.options.pointer("/chart/height").and_then(Value::as_u64)
    }
}

fn months() -> Value {
    json!(MONTH_ABBREVIATIONS)
}

/// Line chart of the four sales metrics over `categories`.
pub fn sales_comparison_options(categories: &[String]) -> ChartConfig {
    let options = json!({
        "chart": {
            "type": "line",
            "height": 350,
            "toolbar": { "show": true },
            "zoom": { "enabled": true }
        },
        "stroke": { "curve": "smooth", "width": 2 },
        "xaxis": { "categories": categories },
        "yaxis": {
            "title": { "text": "Amount ($)" },
            "labels": {}
        },
        "tooltip": { "y": {} },
        "colors": SALES_COMPARISON_COLORS,
        "legend": { "position": "top" },
        "noData": {
            "text": "No Data Found",
            "align": "center",
            "verticalAlign": "middle",
            "offsetX": 0,
            "offsetY": 0,
            "style": {
                "color": "#6c757d",
                "fontSize": "16px",
                "fontFamily": "inherit"
            }
        }
    });

    ChartConfig {
        options,
        formatters: vec![
            FormatterSlot {
                path: &["yaxis", "labels", "formatter"],
                kind: FormatterKind::Currency,
            },
            FormatterSlot {
                path: &["tooltip", "y", "formatter"],
                kind: FormatterKind::Currency,
            },
        ],
    }
}

/// Gradient area chart of the monthly sales tax summary.
pub fn monthly_sales_tax_summary_options() -> ChartConfig {
    let options = json!({
        "chart": { "type": "area", "height": 320, "toolbar": { "show": false } },
        "dataLabels": { "enabled": false },
        "stroke": { "curve": "smooth", "width": [3, 3, 2, 2] },
        "xaxis": { "categories": months(), "title": { "text": "Month" } },
        "yaxis": { "labels": {} },
        "legend": { "position": "top" },
        "colors": ["#2563eb", "#22c55e", "#f59e42", "#a0aec0"],
        "fill": {
            "type": "gradient",
            "gradient": {
                "shadeIntensity": 1,
                "opacityFrom": 0.4,
                "opacityTo": 0.1,
                "stops": [0, 90, 100]
            }
        }
    });

    ChartConfig {
        options,
        formatters: vec![millions_axis()],
    }
}

/// Solid single-series area chart of sales income.
pub fn sales_income_options() -> ChartConfig {
    let axis_label_style = json!({ "colors": "#888", "fontWeight": 500, "fontSize": "14px" });
    let options = json!({
        "chart": {
            "type": "area",
            "height": 320,
            "toolbar": { "show": false },
            "zoom": { "enabled": false },
            "background": "transparent"
        },
        "dataLabels": { "enabled": false },
        "stroke": { "curve": "smooth", "width": 0 },
        "fill": { "type": "solid", "colors": ["#7c3aed"], "opacity": 0.85 },
        "xaxis": {
            "categories": months(),
            "labels": { "style": axis_label_style },
            "axisBorder": { "show": false },
            "axisTicks": { "show": false }
        },
        "yaxis": {
            "labels": { "style": axis_label_style },
            "grid": { "show": true }
        },
        "grid": {
            "borderColor": "#e5e7eb",
            "strokeDashArray": 4,
            "yaxis": { "lines": { "show": true } },
            "xaxis": { "lines": { "show": false } }
        },
        "tooltip": { "theme": "light", "style": { "fontSize": "15px" } },
        "legend": { "show": false },
        "colors": ["#7c3aed"],
        "markers": { "size": 0 }
    });

    ChartConfig {
        options,
        formatters: vec![millions_axis()],
    }
}

/// Grouped bar chart of registered taxpayers against risk-flagged ones.
pub fn taxpayers_risk_options() -> ChartConfig {
    let options = json!({
        "chart": { "type": "bar", "height": 320, "toolbar": { "show": false } },
        "plotOptions": {
            "bar": { "horizontal": false, "columnWidth": "55%", "borderRadius": 4 }
        },
        "dataLabels": { "enabled": false },
        "stroke": { "show": true, "width": 2, "colors": ["transparent"] },
        "xaxis": { "categories": months(), "title": { "text": "Month" } },
        "yaxis": { "title": { "text": "Taxpayers" } },
        "legend": { "position": "top", "fontWeight": 600 },
        "colors": ["#6366f1", "#f43f5e"],
        "tooltip": { "shared": true, "intersect": false, "style": { "fontSize": "15px" } },
        "grid": { "borderColor": "#e0e7ef", "strokeDashArray": 4 }
    });

    ChartConfig {
        options,
        formatters: Vec::new(),
    }
}

/// Radar chart of employees on payroll against employees paid SWT.
pub fn employee_radar_options() -> ChartConfig {
    let options = json!({
        "chart": { "type": "radar", "height": 350, "toolbar": { "show": false } },
        "xaxis": {
            "categories": months(),
            "labels": { "style": { "fontWeight": 500, "color": "#334155", "fontSize": "14px" } }
        },
        "yaxis": {
            "labels": { "style": { "fontWeight": 500, "color": "#334155" } }
        },
        "legend": { "position": "top", "fontWeight": 600 },
        "colors": ["#6366f1", "#a5b4fc"],
        "stroke": { "width": 2 },
        "fill": { "opacity": 0.2 },
        "markers": { "size": 4 },
        "tooltip": {
            "enabled": true,
            "shared": true,
            "intersect": false,
            "style": { "fontSize": "15px" }
        }
    });

    ChartConfig {
        options,
        formatters: vec![FormatterSlot {
            path: &["tooltip", "custom"],
            kind: FormatterKind::EmployeeTooltip,
        }],
    }
}

/// Line chart of employees on payroll against employees paid SWT.
pub fn employee_line_options() -> ChartConfig {
    let options = json!({
        "chart": { "type": "line", "height": 320, "toolbar": { "show": false } },
        "stroke": { "width": 3, "curve": "smooth" },
        "xaxis": {
            "categories": months(),
            "title": { "text": "Month" },
            "labels": { "style": { "fontWeight": 500, "color": "#334155", "fontSize": "14px" } }
        },
        "yaxis": {
            "title": { "text": "Employees" },
            "labels": { "style": { "fontWeight": 500, "color": "#334155" } }
        },
        "legend": { "position": "top", "fontWeight": 600 },
        "colors": ["#2563eb", "#22c55e"],
        "markers": { "size": 5 },
        "tooltip": { "shared": true, "intersect": false, "style": { "fontSize": "15px" } },
        "grid": { "borderColor": "#e0e7ef", "strokeDashArray": 4 }
    });

    ChartConfig {
        options,
        formatters: Vec::new(),
    }
}

/// Gradient area chart comparing salaries, SWT-liable salaries and SWT deducted.
pub fn swt_salaries_options() -> ChartConfig {
    let series_colors = json!(["#4338ca", "#22c55e", "#f59e42"]);
    let options = json!({
        "chart": { "type": "area", "height": 320, "toolbar": { "show": false } },
        "dataLabels": { "enabled": false },
        "stroke": { "curve": "smooth", "width": [2, 2, 2] },
        "fill": {
            "type": "gradient",
            "gradient": {
                "shadeIntensity": 1,
                "opacityFrom": 0.5,
                "opacityTo": 0.45,
                "stops": [0, 90, 100]
            }
        },
        "xaxis": {
            "categories": months(),
            "title": { "text": "Month" },
            "labels": { "style": { "colors": "#888", "fontWeight": 500, "fontSize": "14px" } },
            "axisBorder": { "show": true, "color": "#e0e7ef" },
            "axisTicks": { "show": true, "color": "#e0e7ef" },
            "offsetY": 0,
            "position": "bottom"
        },
        "yaxis": {
            "labels": { "style": { "colors": "#888", "fontWeight": 500, "fontSize": "14px" } }
        },
        "legend": {
            "position": "top",
            "fontWeight": 700,
            "labels": { "colors": series_colors }
        },
        "colors": series_colors,
        "tooltip": { "shared": true, "intersect": false, "style": { "fontSize": "15px" } },
        "grid": { "borderColor": "#e5e7eb", "strokeDashArray": 4 }
    });

    ChartConfig {
        options,
        formatters: vec![millions_axis()],
    }
}

fn millions_axis() -> FormatterSlot {
    FormatterSlot {
        path: &["yaxis", "labels", "formatter"],
        kind: FormatterKind::Millions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_configs() -> Vec<ChartConfig> {
        vec![
            sales_comparison_options(&[]),
            monthly_sales_tax_summary_options(),
            sales_income_options(),
            taxpayers_risk_options(),
            employee_radar_options(),
            employee_line_options(),
            swt_salaries_options(),
        ]
    }

    #[test]
    fn sales_comparison_keeps_chart_keys() {
        let categories = vec!["Jan 2021".to_string(), "Feb 2021".to_string()];
        let config = sales_comparison_options(&categories);

        assert_eq!(config.chart_type(), Some("line"));
        assert_eq!(config.height(), Some(350));
        let options = &config.options;
        assert_eq!(options["stroke"]["curve"], "smooth");
        assert_eq!(options["stroke"]["width"], 2);
        assert_eq!(options["xaxis"]["categories"], json!(["Jan 2021", "Feb 2021"]));
        assert_eq!(
            options["colors"],
            json!(["#008FFB", "#00E396", "#FEB019", "#FF4560"])
        );
        assert_eq!(options["legend"]["position"], "top");
        assert_eq!(options["noData"]["text"], "No Data Found");
        assert_eq!(options["noData"]["style"]["color"], "#6c757d");
        assert_eq!(options["noData"]["style"]["fontSize"], "16px");
    }

    #[test]
    fn sales_comparison_formats_currency_on_axis_and_tooltip() {
        let config = sales_comparison_options(&[]);
        let paths: Vec<_> = config
            .formatters
            .iter()
            .filter(|slot| slot.kind == FormatterKind::Currency)
            .map(|slot| slot.path.join("."))
            .collect();
        assert_eq!(paths, vec!["yaxis.labels.formatter", "tooltip.y.formatter"]);
    }

    #[test]
    fn formatter_parents_exist_in_options() {
        for config in all_configs() {
            for slot in &config.formatters {
                let (_, parents) = slot.path.split_last().unwrap();
                let mut node = &config.options;
                for key in parents {
                    node = node.get(key).unwrap_or_else(|| {
                        panic!("{:?} missing '{key}' for {:?}", config.chart_type(), slot)
                    });
                }
                assert!(node.is_object());
            }
        }
    }

    #[test]
    fn illustrative_charts_use_month_categories() {
        for config in all_configs().into_iter().skip(1) {
            let categories = config.options.pointer("/xaxis/categories").unwrap();
            assert_eq!(categories.as_array().unwrap().len(), 12);
            assert_eq!(categories[0], "Jan");
            assert_eq!(categories[11], "Dec");
        }
    }

    #[test]
    fn chart_types_match_cards() {
        let types: Vec<_> = all_configs()
            .iter()
            .map(|config| config.chart_type().map(str::to_string))
            .collect();
        let expected = ["line", "area", "area", "bar", "radar", "line", "area"];
        assert_eq!(
            types,
            expected.iter().map(|t| Some(t.to_string())).collect::<Vec<_>>()
        );
    }

    #[test]
    fn radar_tooltip_is_custom() {
        let config = employee_radar_options();
        assert_eq!(
            config.formatters,
            vec![FormatterSlot {
                path: &["tooltip", "custom"],
                kind: FormatterKind::EmployeeTooltip,
            }]
        );
    }
}
