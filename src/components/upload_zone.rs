use web_sys::{DragEvent, File, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UploadZoneProps {
    pub dragging: bool,
    pub has_image: bool,
    pub on_file: Callback<File>,
    pub on_dragging: Callback<bool>,
    pub on_reset: Callback<()>,
}

/// Drop zone + file picker. While an image is loaded the picker is replaced
/// by the "Choose Another File" button.
#[function_component(UploadZone)]
pub fn upload_zone(props: &UploadZoneProps) -> Html {
    let on_file_change = {
        let on_file = props.on_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file.emit(file);
            }
        })
    };

    let on_drag_over = {
        let on_dragging = props.on_dragging.clone();
        Callback::from(move |e: DragEvent| {
            // Sin prevent_default el navegador abre el archivo
            e.prevent_default();
            on_dragging.emit(true);
        })
    };

    let on_drag_leave = {
        let on_dragging = props.on_dragging.clone();
        Callback::from(move |_: DragEvent| {
            on_dragging.emit(false);
        })
    };

    let on_drop = {
        let on_file = props.on_file.clone();
        let on_dragging = props.on_dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            on_dragging.emit(false);
            let file = e
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                on_file.emit(file);
            }
        })
    };

    let zone_class = if props.dragging {
        "upload-section dragging"
    } else {
        "upload-section"
    };

    html! {
        <div
            class={zone_class}
            ondragover={on_drag_over}
            ondragleave={on_drag_leave}
            ondrop={on_drop}
        >
            <h2>{"Upload Your Image Here"}</h2>
            <p>{"Drag & drop an image, or click below to choose a file"}</p>

            if !props.has_image {
                <input type="file" accept="image/*" onchange={on_file_change} />
            } else {
                <button class="choose-file-btn" onclick={props.on_reset.reform(|_| ())}>
                    {"Choose Another File"}
                </button>
            }
        </div>
    }
}
