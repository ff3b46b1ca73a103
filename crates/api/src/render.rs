//! Pure HTML rendering for the home page.
//!
//! [`home_page`] maps a fully-populated [`PageContext`] to a complete HTML
//! document: no I/O, no request state, no globals. Handlers fetch and order
//! the data; this module only formats it.

use mission_log_core::types::LogDate;
use mission_log_db::models::log_entry::LogEntry;
use mission_log_db::models::task::Task;

/// Everything the home page needs, already validated and ordered.
#[derive(Debug)]
pub struct PageContext {
    pub log_date: LogDate,
    pub logs: Vec<LogEntry>,
    pub tasks: Vec<Task>,
}

/// Render the home page for one day.
pub fn home_page(ctx: &PageContext) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>Mission Log</title>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str("<h1>Mission Log</h1>\n");

    render_day_nav(&mut html, ctx.log_date);
    render_logs(&mut html, ctx);
    render_tasks(&mut html, ctx);

    html.push_str("</body>\n</html>\n");
    html
}

/// Current day heading plus previous/next navigation and the export link.
fn render_day_nav(html: &mut String, log_date: LogDate) {
    let date = log_date.to_string();
    html.push_str("<nav class=\"day-nav\">\n");
    if let Some(prev) = log_date.pred_opt() {
        html.push_str(&format!("<a href=\"/?day={prev}\">&larr; {prev}</a>\n"));
    }
    html.push_str(&format!("<h2>{date}</h2>\n"));
    if let Some(next) = log_date.succ_opt() {
        html.push_str(&format!("<a href=\"/?day={next}\">{next} &rarr;</a>\n"));
    }
    html.push_str(&format!(
        "<a href=\"/export?date={date}\">Export CSV</a>\n"
    ));
    html.push_str("</nav>\n");
}

fn render_logs(html: &mut String, ctx: &PageContext) {
    let date = ctx.log_date.to_string();
    html.push_str("<section class=\"logs\">\n<h3>Log</h3>\n<ul>\n");
    for entry in &ctx.logs {
        html.push_str(&format!(
            "<li class=\"log-entry\"><time>{}</time> <strong>{}</strong> {}</li>\n",
            entry.created_at.format("%H:%M"),
            escape_html(&entry.category),
            escape_html(&entry.outcome),
        ));
    }
    html.push_str("</ul>\n");
    html.push_str(&format!(
        "<form method=\"post\" action=\"/log\">\n\
         <input type=\"hidden\" name=\"date\" value=\"{date}\">\n\
         <input type=\"text\" name=\"category\" placeholder=\"Category\" required>\n\
         <input type=\"text\" name=\"outcome\" placeholder=\"Outcome\" required>\n\
         <button type=\"submit\">Add log</button>\n\
         </form>\n"
    ));
    html.push_str("</section>\n");
}

fn render_tasks(html: &mut String, ctx: &PageContext) {
    let date = ctx.log_date.to_string();
    html.push_str("<section class=\"tasks\">\n<h3>Tasks</h3>\n<ul>\n");
    for task in &ctx.tasks {
        let class = if task.done { "task done" } else { "task" };
        let marker = if task.done { "[x]" } else { "[ ]" };
        html.push_str(&format!(
            "<li class=\"{class}\">\n\
             <form method=\"post\" action=\"/task/toggle\">\n\
             <input type=\"hidden\" name=\"task_id\" value=\"{}\">\n\
             <button type=\"submit\">{marker}</button>\n\
             </form>\n\
             <span>{}</span>\n\
             </li>\n",
            task.id,
            escape_html(&task.description),
        ));
    }
    html.push_str("</ul>\n");
    html.push_str(&format!(
        "<form method=\"post\" action=\"/task\">\n\
         <input type=\"hidden\" name=\"date\" value=\"{date}\">\n\
         <input type=\"text\" name=\"description\" placeholder=\"New task\" required>\n\
         <button type=\"submit\">Add task</button>\n\
         </form>\n"
    ));
    html.push_str("</section>\n");
}

/// Escape text for interpolation into HTML content or attribute values.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
