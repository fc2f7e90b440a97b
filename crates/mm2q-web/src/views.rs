//! HTML views for the form and result pages.
//!
//! Plain string rendering. User-supplied text is escaped with `html_escape`
//! (attribute or text context); computed numbers are formatted with a fixed
//! precision.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use mm2q_core::queue::mm2::MetricsResult;

/// Severity of an alert shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Warning,
}

impl AlertKind {
    fn css_class(self) -> &'static str {
        match self {
            AlertKind::Error => "alert alert-error",
            AlertKind::Warning => "alert alert-warning",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Alert<'a> {
    pub kind: AlertKind,
    pub message: &'a str,
    /// Form field the message refers to, if any.
    pub field: Option<&'a str>,
}

/// Values to put back into the form after a rejected submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prefill<'a> {
    pub arrival: &'a str,
    pub service: &'a str,
}

pub fn fmt_num(v: f64, precision: usize) -> String {
    format!("{v:.precision$}")
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<main>\n{body}</main>\n</body>\n</html>\n"
    )
}

/// Input form, optionally with an alert and the previously submitted values.
pub fn render_index(alert: Option<Alert<'_>>, prefill: Prefill<'_>) -> String {
    let mut body = String::new();
    body.push_str("<h1>M/M/2 queue calculator</h1>\n");

    if let Some(a) = alert {
        body.push_str("<div class=\"messages-container\">\n");
        let _ = write!(body, "<div class=\"{}\"", a.kind.css_class());
        if let Some(f) = a.field {
            let _ = write!(body, " data-field=\"{}\"", encode_double_quoted_attribute(f));
        }
        let _ = writeln!(
            body,
            "><span class=\"message-text\">{}</span></div>",
            encode_text(a.message)
        );
        body.push_str("</div>\n");
    }

    let _ = write!(
        body,
        "<form class=\"input-form\" method=\"post\" action=\"/\">\n\
         <label for=\"arrival\">Mean time between arrivals (minutes)</label>\n\
         <input id=\"arrival\" name=\"arrival\" type=\"text\" inputmode=\"decimal\" value=\"{}\">\n\
         <label for=\"service\">Mean service time per server (minutes)</label>\n\
         <input id=\"service\" name=\"service\" type=\"text\" inputmode=\"decimal\" value=\"{}\">\n\
         <button type=\"submit\">Calculate</button>\n\
         </form>\n",
        encode_double_quoted_attribute(prefill.arrival),
        encode_double_quoted_attribute(prefill.service),
    );

    page("M/M/2 queue calculator", &body)
}

/// Result page listing every computed quantity.
pub fn render_result(m: &MetricsResult, precision: usize) -> String {
    let rows: [(&str, &str, f64); 11] = [
        ("arrival_time", "Mean time between arrivals (min)", m.arrival_time),
        ("service_time", "Mean service time (min)", m.service_time),
        ("arrival_rate", "Arrival rate \u{3bb} (per min)", m.arrival_rate),
        ("service_rate", "Service rate \u{3bc} per server (per min)", m.service_rate),
        ("utilization", "Utilization \u{3c1}", m.utilization),
        ("denom_w", "\u{3bc} - \u{3bb}/2", m.denom_w),
        ("denom_wq", "2\u{3bc}(\u{3bc} - \u{3bb}/2)", m.denom_wq),
        ("mean_time_in_system", "Mean time in system W (min)", m.mean_time_in_system),
        ("mean_wait_in_queue", "Mean wait in queue Wq (min)", m.mean_wait_in_queue),
        ("mean_number_in_system", "Mean number in system L", m.mean_number_in_system),
        ("mean_number_in_queue", "Mean number in queue Lq", m.mean_number_in_queue),
    ];

    let mut body = String::new();
    body.push_str("<h1>M/M/2 queue metrics</h1>\n<table class=\"results\">\n");
    for (id, label, value) in rows {
        let _ = writeln!(
            body,
            "<tr id=\"{id}\"><th>{label}</th><td>{}</td></tr>",
            fmt_num(value, precision)
        );
    }
    body.push_str("</table>\n<p><a href=\"/\">New calculation</a></p>\n");

    page("M/M/2 queue metrics", &body)
}
