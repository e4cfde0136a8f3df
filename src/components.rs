use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::HttpApi;
use crate::board::ActivityBoard;
use crate::config::BoardConfig;
use crate::host::BrowserHost;
use crate::model::ActivityList;
use crate::render::{
    card_views, select_options, CardView, ParticipantRow, ParticipantRows, LOADING, LOAD_FAILED,
    NO_PARTICIPANTS,
};
use crate::state::{Banner, BoardAction, ListState, UiState};

type Board = ActivityBoard<HttpApi, BrowserHost>;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: BoardConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_reducer(UiState::default);

    // Built once; later renders reuse the first board.
    let board = {
        let dispatcher = state.dispatcher();
        let config = props.config.clone();
        use_state(move || {
            Rc::new(Board::new(
                HttpApi::new(&config.api_base),
                BrowserHost::new(dispatcher),
                config.banner,
            ))
        })
    };

    {
        let board = (*board).clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                board.load_activities().await;
            });
            || ()
        });
    }

    let on_unregister = {
        let board = (*board).clone();
        Callback::from(move |row: ParticipantRow| {
            let board = board.clone();
            spawn_local(async move {
                board.submit_unregister(&row.activity, &row.email).await;
            });
        })
    };

    let on_email = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(BoardAction::EmailEdited(input.value()));
        })
    };

    let on_activity = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            dispatcher.dispatch(BoardAction::ActivityChosen(sel.value()));
        })
    };

    let on_submit = {
        let board = (*board).clone();
        let form = state.form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let board = board.clone();
            let form = form.clone();
            spawn_local(async move {
                board.submit_signup(&form.activity, &form.email).await;
            });
        })
    };

    let (list_body, options) = match &state.list {
        ListState::Loading => (
            html! { <p>{ LOADING }</p> },
            select_options(&ActivityList::default()),
        ),
        ListState::Failed => (
            html! { <p>{ LOAD_FAILED }</p> },
            select_options(&ActivityList::default()),
        ),
        ListState::Ready(list) => (
            html! {
              <>
                { for card_views(list).into_iter().map(|card| {
                    let key = card.name.clone();
                    html! {
                        <ActivityCard key={key} {card} on_unregister={on_unregister.clone()} />
                    }
                }) }
              </>
            },
            select_options(list),
        ),
    };

    html! {
      <div class="wrap">
        <header>
          <h1>{ "Mergington High School" }</h1>
          <h2>{ "Extracurricular Activities" }</h2>
        </header>

        <main>
          <section id="activities-container">
            <h3>{ "Available Activities" }</h3>
            <div id="activities-list">{ list_body }</div>
          </section>

          <section id="signup-container">
            <h3>{ "Sign Up for an Activity" }</h3>
            <form id="signup-form" onsubmit={on_submit}>
              <div class="form-group">
                <label for="email">{ "Student Email:" }</label>
                <input
                  type="email"
                  id="email"
                  placeholder="your-email@mergington.edu"
                  value={state.form.email.clone()}
                  oninput={on_email}
                />
              </div>
              <div class="form-group">
                <label for="activity">{ "Select Activity:" }</label>
                <select id="activity" onchange={on_activity}>
                  { for options.into_iter().map(|(value, label)| {
                      let selected = value == state.form.activity;
                      html! { <option {value} {selected}>{ label }</option> }
                  }) }
                </select>
              </div>
              <button type="submit">{ "Sign Up" }</button>
            </form>
            <MessageBanner banner={state.banner.clone()} />
          </section>
        </main>
      </div>
    }
}

#[derive(Properties, PartialEq)]
struct ActivityCardProps {
    card: CardView,
    on_unregister: Callback<ParticipantRow>,
}

#[function_component(ActivityCard)]
fn activity_card(props: &ActivityCardProps) -> Html {
    let card = &props.card;

    let rows = match &card.rows {
        ParticipantRows::Empty => html! { <li class="empty">{ NO_PARTICIPANTS }</li> },
        ParticipantRows::Listed(rows) => html! {
          <>
            { for rows.iter().map(|row| {
                let onclick = {
                    let row = row.clone();
                    props.on_unregister.reform(move |_: MouseEvent| row.clone())
                };
                html! {
                  <li class="participant-item" key={row.email.clone()}>
                    <span class="participant-email">{ row.email.clone() }</span>
                    <button
                      class="delete-participant"
                      type="button"
                      title="Unregister participant"
                      {onclick}
                    >{ "\u{d7}" }</button>
                  </li>
                }
            }) }
          </>
        },
    };

    html! {
      <div class="activity-card">
        <h4>{ card.name.clone() }</h4>
        <p>{ card.description.clone() }</p>
        <p><strong>{ "Schedule:" }</strong>{ format!(" {}", card.schedule) }</p>
        <p><strong>{ "Availability:" }</strong>{ format!(" {}", card.availability()) }</p>
        <div class="participants-section">
          <div class="participants-title">{ card.participants_title() }</div>
          <ul class="participants">{ rows }</ul>
        </div>
      </div>
    }
}

#[derive(Properties, PartialEq)]
struct MessageBannerProps {
    banner: Banner,
}

#[function_component(MessageBanner)]
fn message_banner(props: &MessageBannerProps) -> Html {
    let banner = &props.banner;
    let class = classes!(
        "message",
        banner.kind.class(),
        (!banner.visible).then_some("hidden")
    );

    html! {
      <div id="message" {class}>{ banner.text.clone() }</div>
    }
}
