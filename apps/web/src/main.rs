mod animation;
mod state;
mod view;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use leaderboard_core::{Dashboard, RawDataset};
use ratzilla::ratatui::{
    layout::{Alignment, Margin},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Text},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use state::WebState;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Request, RequestInit, RequestMode, Response};

const DATA_URL: &str = "data.json";

fn main() -> io::Result<()> {
    let state = Rc::new(RefCell::new(WebState::default()));

    spawn_local(fetch_dashboard(state.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = state.clone();
        move |event| state.borrow_mut().on_key(event.code)
    });

    terminal.draw_web(move |f| {
        let area = f.area();
        let block = Block::default()
            .title("Funding Growth Leaderboard")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 0));
        f.render_widget(block, area);

        let mut state = state.borrow_mut();
        state.tick(js_sys::Date::now() / 1000.0);

        if let Some(dashboard) = state.dashboard.as_ref() {
            view::render_dashboard(&state, dashboard, f, inner);
        } else {
            let paragraph = Paragraph::new(Text::from(TextLine::from("Loading data.json...")))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, inner);
        }
    });

    Ok(())
}

/// Error pages can carry a JSON body that would parse as an empty dataset,
/// so anything outside 2xx is a failed load.
fn check_status(ok: bool, status: u16) -> Result<(), String> {
    if ok {
        Ok(())
    } else {
        Err(format!("Failed to fetch {DATA_URL}: HTTP {status}"))
    }
}

/// Fetches and parses the dataset once. Failures are logged and leave the
/// page on its loading message.
async fn fetch_dashboard(state: Rc<RefCell<WebState>>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let Ok(request) = Request::new_with_str_and_init(DATA_URL, &opts) else {
        return;
    };

    let Ok(response_value) =
        wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request)).await
    else {
        web_sys::console::error_1(&format!("Failed to fetch {DATA_URL}").into());
        return;
    };

    let Ok(response) = response_value.dyn_into::<Response>() else {
        web_sys::console::error_1(&"Failed to read response".into());
        return;
    };

    if let Err(message) = check_status(response.ok(), response.status()) {
        web_sys::console::error_1(&message.into());
        return;
    }

    let Ok(text_promise) = response.text() else {
        web_sys::console::error_1(&format!("Failed to read {DATA_URL} body").into());
        return;
    };
    let Ok(body) = wasm_bindgen_futures::JsFuture::from(text_promise).await else {
        web_sys::console::error_1(&format!("Failed to read {DATA_URL} body").into());
        return;
    };
    let Some(json) = body.as_string() else {
        web_sys::console::error_1(&format!("{DATA_URL} body is not text").into());
        return;
    };

    let dataset = match RawDataset::from_json_str(&json) {
        Ok(dataset) => dataset,
        Err(error) => {
            web_sys::console::error_1(&format!("Failed to parse {DATA_URL}: {error}").into());
            return;
        }
    };

    let dashboard = Dashboard::from_dataset(&dataset);
    web_sys::console::log_1(
        &format!("Loaded {} companies", dashboard.records().len()).into(),
    );
    state.borrow_mut().load(dashboard);
}
