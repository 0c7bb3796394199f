//! Value formatters used by chart axes and tooltips.

/// Dollar amount with en-US digit grouping and exactly two decimals.
///
/// The sign follows the dollar sign: `-1234.5` becomes `$-1,234.50`.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("${sign}{}.{fraction}", group_thousands(whole))
}

/// Axis label in millions for values of 1000 and above (`"126.4M"`),
/// the plain number otherwise.
pub fn format_millions(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else {
        value.to_string()
    }
}

/// Tooltip markup of the employee radar chart.
pub fn employee_tooltip_html(month: &str, payroll: f64, paid_swt: f64) -> String {
    format!(
        r#"<div style="padding:8px 12px;">
  <div style="font-weight:600; color:#6366f1; margin-bottom:4px;">{month}</div>
  <div><span style="color:#6366f1;">●</span> Employees on Payroll: <b>{payroll}</b></div>
  <div><span style="color:#a5b4fc;">●</span> Employees Paid SWT: <b>{paid_swt}</b></div>
</div>"#
    )
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
