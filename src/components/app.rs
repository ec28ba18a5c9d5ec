use yew::prelude::*;

use super::{CaptionPanel, QaPanel, UploadZone};
use crate::hooks::use_session;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_session();
    let store = (*session.state).clone();

    html! {
        <div>
            // Header Section
            <div class="header">
                <h1>{"Image Captioning & Q&A"}</h1>
                <p class="branding">{"Empowering AI-driven Visual Understanding"}</p>
            </div>

            // Content Section
            <div class="content-container">
                // Upload, Image, and Caption (Left)
                <div class="upload-caption-container">
                    <UploadZone
                        dragging={store.dragging}
                        has_image={store.has_image()}
                        on_file={session.upload_file.clone()}
                        on_dragging={session.set_dragging.clone()}
                        on_reset={session.reset_session.clone()}
                    />

                    if let Some(preview) = &store.preview_url {
                        <div class="image-section">
                            <img src={preview.clone()} alt="Uploaded Preview" />
                        </div>
                    }

                    <CaptionPanel
                        caption={store.caption.clone()}
                        pending={store.caption_pending}
                        audio_url={store.caption_audio_url.clone()}
                    />
                </div>

                // Q&A (Right)
                <QaPanel
                    question={store.question.clone()}
                    answer={store.answer.clone()}
                    pending={store.answer_pending}
                    audio_url={store.qa_audio_url.clone()}
                    on_question_change={session.set_question.clone()}
                    on_ask={session.ask_question.clone()}
                />
            </div>
        </div>
    }
}
