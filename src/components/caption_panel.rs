use super::AudioPlayer;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CaptionPanelProps {
    pub caption: AttrValue,
    pub pending: bool,
    pub audio_url: Option<AttrValue>,
}

#[function_component(CaptionPanel)]
pub fn caption_panel(props: &CaptionPanelProps) -> Html {
    html! {
        <div class="caption-section">
            if props.pending {
                <p class="loading">{"Generating Caption..."}</p>
            } else if !props.caption.is_empty() {
                <>
                    <p class="caption">{format!("Caption: {}", props.caption)}</p>
                    if let Some(url) = &props.audio_url {
                        <AudioPlayer title="Caption Audio" src={url.clone()} />
                    }
                </>
            }
        </div>
    }
}
