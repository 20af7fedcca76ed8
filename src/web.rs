// Single-page web shell over the report layer.
//
// One route: GET renders the analysis form, POST runs the selected report
// and re-renders the page with the result table or the error message.
// Requests are served sequentially from one accept loop; the report layer
// is synchronous and the dataset is read-only after load, so nothing here
// needs to coordinate.
use crate::error::{AnalysisError, Result};
use crate::loader::DataLoader;
use crate::output::{escape_html, render_html};
use crate::reports::{self, ReportKind};
use log::{debug, error, info};
use std::io::Read;
use tiny_http::{Header, Method, Response, Server};

const PAGE_HEAD: &str = "<!doctype html>\n<html lang=\"en\">\n  <head>\n    <title>Sales Analysis</title>\n  </head>\n  <body>\n    <h1>Sales Analysis</h1>\n    <form method=\"post\">\n      <label for=\"analysis_type\">Select Analysis Type:</label>\n      <select id=\"analysis_type\" name=\"analysis_type\" onchange=\"toggleBranchId()\">\n";

const PAGE_FORM_TAIL: &str = "      </select>\n      <br>\n      <div id=\"branch_id_div\">\n        <label for=\"branch_id\">Enter Branch ID:</label>\n        <input type=\"text\" id=\"branch_id\" name=\"branch_id\">\n      </div>\n      <br>\n      <button type=\"submit\">Submit</button>\n    </form>\n";

const PAGE_FOOT: &str = "    <script>\n      function toggleBranchId() {\n        var analysisType = document.getElementById(\"analysis_type\").value;\n        var branchIdDiv = document.getElementById(\"branch_id_div\");\n        branchIdDiv.style.display = analysisType === \"monthly_sales\" ? \"block\" : \"none\";\n      }\n      document.addEventListener(\"DOMContentLoaded\", toggleBranchId);\n    </script>\n  </body>\n</html>\n";

/// Serve the analysis form until the process is killed.
pub fn serve(loader: &DataLoader, addr: &str) -> Result<()> {
    let server = Server::http(addr)
        .map_err(|e| AnalysisError::Io(format!("failed to bind {}: {}", addr, e)))?;
    info!("listening on http://{}", addr);
    println!("Sales analysis server running on http://{}", addr);

    for mut request in server.incoming_requests() {
        debug!("{} {}", request.method(), request.url());
        let html = if request.method() == &Method::Post {
            let mut body = String::new();
            match request.as_reader().read_to_string(&mut body) {
                Ok(_) => handle_submit(loader, &body),
                Err(e) => page(None, Some(format!("i/o failure: {}", e)), ""),
            }
        } else {
            page(None, None, "")
        };
        let response = Response::from_string(html).with_header(html_content_type());
        if let Err(e) = request.respond(response) {
            error!("failed to send response: {}", e);
        }
    }
    Ok(())
}

/// Run the posted analysis and render the page around its outcome.
fn handle_submit(loader: &DataLoader, body: &str) -> String {
    let mut analysis_type = String::new();
    let mut branch_id: Option<String> = None;
    for (key, value) in form_urlencoded::parse(body.as_bytes()) {
        match key.as_ref() {
            "analysis_type" => analysis_type = value.into_owned(),
            "branch_id" => branch_id = Some(value.into_owned()),
            _ => {}
        }
    }
    match run(loader, &analysis_type, branch_id.as_deref()) {
        Ok((title, table)) => page(Some((title, table)), None, &analysis_type),
        Err(e) => page(None, Some(e.to_string()), &analysis_type),
    }
}

fn run(
    loader: &DataLoader,
    analysis_type: &str,
    branch_id: Option<&str>,
) -> Result<(&'static str, String)> {
    let kind = ReportKind::parse(analysis_type)?;
    let data = loader.get()?;
    let report = reports::run_report(data, kind, branch_id)?;
    Ok((kind.title(), render_html(&report)))
}

fn page(result: Option<(&str, String)>, error: Option<String>, selected: &str) -> String {
    let mut html = String::from(PAGE_HEAD);
    for kind in ReportKind::ALL {
        let marker = if kind.name() == selected { " selected" } else { "" };
        html.push_str(&format!(
            "        <option value=\"{}\"{}>{}</option>\n",
            kind.name(),
            marker,
            kind.title()
        ));
    }
    html.push_str(PAGE_FORM_TAIL);
    if let Some(message) = error {
        html.push_str(&format!(
            "    <div style=\"color: red;\">{}</div>\n",
            escape_html(&message)
        ));
    }
    if let Some((title, table)) = result {
        html.push_str(&format!(
            "    <h2>{} Result</h2>\n    <div>{}</div>\n",
            escape_html(title),
            table
        ));
    }
    html.push_str(PAGE_FOOT);
    html
}

fn html_content_type() -> Header {
    Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..])
        .expect("static header")
}
