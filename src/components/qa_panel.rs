use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::AudioPlayer;

#[derive(Properties, PartialEq)]
pub struct QaPanelProps {
    pub question: AttrValue,
    /// None = nunca se preguntó (no se renderiza el área de respuesta);
    /// Some("") = pendiente o sin texto; Some(texto) = respuesta lista
    pub answer: Option<String>,
    pub pending: bool,
    pub audio_url: Option<AttrValue>,
    pub on_question_change: Callback<String>,
    pub on_ask: Callback<()>,
}

#[function_component(QaPanel)]
pub fn qa_panel(props: &QaPanelProps) -> Html {
    let on_input = {
        let on_question_change = props.on_question_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_question_change.emit(input.value());
        })
    };

    // Enter submits, same as the button
    let on_key_down = {
        let on_ask = props.on_ask.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_ask.emit(());
            }
        })
    };

    html! {
        <div class="qa-container">
            <h2>{"Ask a Question About the Image"}</h2>
            <div class="qa-section">
                <input
                    type="text"
                    placeholder="Ask a question..."
                    value={props.question.clone()}
                    oninput={on_input}
                    onkeydown={on_key_down}
                />
                <button onclick={props.on_ask.reform(|_| ())}>{"Get Answer"}</button>
            </div>

            if let Some(answer) = &props.answer {
                <div class="answer-section">
                    if props.pending {
                        <p class="loading">{"Processing answer..."}</p>
                    } else if !answer.is_empty() {
                        <>
                            <p class="answer">{format!("Answer: {}", answer)}</p>
                            if let Some(url) = &props.audio_url {
                                <AudioPlayer title="Answer Audio" src={url.clone()} />
                            }
                        </>
                    }
                </div>
            }
        </div>
    }
}
