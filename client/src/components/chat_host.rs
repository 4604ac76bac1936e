//! Host element for the embedded chat widget, plus the command bridge.
//!
//! The widget itself is mounted by external script against the host div;
//! configuration travels through a serialized `data-options` attribute.
//! Commands come back as `chatkit:command` DOM events and tool answers go
//! out as `chatkit:tool-response` events, so the whole contract with the
//! widget stays at the DOM boundary.

use leptos::prelude::*;

use crate::net::chatkit::WidgetOptions;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::net::api::fetch_map;
#[cfg(feature = "hydrate")]
use crate::net::chatkit::{AgentCommand, answer_tool_call, apply_effect, parse_command};
#[cfg(feature = "hydrate")]
use crate::state::map::MapState;

/// DOM event carrying widget commands into the client.
pub const COMMAND_EVENT: &str = "chatkit:command";
/// DOM event carrying tool-call answers back to the widget.
pub const TOOL_RESPONSE_EVENT: &str = "chatkit:tool-response";

#[cfg(feature = "hydrate")]
fn refetch_map(map_state: RwSignal<MapState>) {
    leptos::task::spawn_local(async move {
        let thread_id = map_state.with_untracked(|state| state.thread_id.clone());
        match fetch_map(thread_id.as_deref()).await {
            Ok(map) => map_state.update(|state| state.set_map(map)),
            Err(err) => leptos::logging::warn!("map refetch failed: {err}"),
        }
    });
}

#[cfg(feature = "hydrate")]
fn dispatch_tool_response(payload: &serde_json::Value) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let init = web_sys::CustomEventInit::new();
    init.set_detail(&wasm_bindgen::JsValue::from_str(&payload.to_string()));
    if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict(TOOL_RESPONSE_EVENT, &init) {
        let _ = window.dispatch_event(&event);
    }
}

#[cfg(feature = "hydrate")]
fn handle_command(
    command: AgentCommand,
    map_state: RwSignal<MapState>,
    on_thread_change: Option<Callback<Option<String>>>,
) {
    match command {
        AgentCommand::ToolCall(call) => {
            let answer = map_state.with_untracked(|state| {
                answer_tool_call(call, state.map.as_ref(), &state.selection)
            });
            dispatch_tool_response(&answer);
        }
        AgentCommand::Effect(effect) => {
            let mut needs_refetch = false;
            map_state.update(|state| {
                needs_refetch = apply_effect(effect, state);
            });
            if needs_refetch {
                refetch_map(map_state);
            }
        }
        AgentCommand::ThreadChange { thread_id } => {
            map_state.update(|state| state.thread_id = thread_id.clone());
            if let Some(callback) = on_thread_change {
                callback.run(thread_id);
            }
            refetch_map(map_state);
        }
    }
}

/// Decode a `chatkit:command` event's detail into a typed command.
#[cfg(feature = "hydrate")]
fn command_from_event(event: &web_sys::Event) -> Option<AgentCommand> {
    let custom = event.dyn_ref::<web_sys::CustomEvent>()?;
    let detail = js_sys::JSON::stringify(&custom.detail())
        .ok()
        .and_then(|s| s.as_string())?;
    let value: serde_json::Value = serde_json::from_str(&detail).ok()?;
    let name = value.get("name")?.as_str()?;
    let arguments = value
        .get("arguments")
        .cloned()
        .unwrap_or(serde_json::Value::Null);
    parse_command(name, &arguments)
}

/// Chat widget host.
///
/// Mounts the widget target div and, on hydration, bridges widget commands
/// into map state. `on_thread_change` lets a page react to conversation
/// switches beyond the map refetch (the cat page re-fetches its cat).
#[component]
pub fn ChatHost(
    #[prop(into)] options: Signal<WidgetOptions>,
    #[prop(optional)] on_thread_change: Option<Callback<Option<String>>>,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let map_state = expect_context::<RwSignal<MapState>>();
        let listener: Rc<RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>>> =
            Rc::new(RefCell::new(None));

        let listener_for_mount = Rc::clone(&listener);
        Effect::new(move || {
            if listener_for_mount.borrow().is_some() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            let cb = Closure::wrap(Box::new(move |event: web_sys::Event| {
                if let Some(command) = command_from_event(&event) {
                    handle_command(command, map_state, on_thread_change);
                } else {
                    leptos::logging::warn!("ignoring unrecognized widget command");
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            if window
                .add_event_listener_with_callback(COMMAND_EVENT, cb.as_ref().unchecked_ref())
                .is_ok()
            {
                *listener_for_mount.borrow_mut() = Some(cb);
            }
        });

        let listener_for_cleanup = Rc::clone(&listener);
        on_cleanup(move || {
            if let Some(cb) = listener_for_cleanup.borrow_mut().take() {
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .remove_event_listener_with_callback(COMMAND_EVENT, cb.as_ref().unchecked_ref());
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_thread_change;
    }

    let options_json = move || serde_json::to_string(&options.get()).unwrap_or_default();

    view! {
        <div class="chat-host" data-options=options_json></div>
    }
}
