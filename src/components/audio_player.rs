use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AudioPlayerProps {
    pub title: AttrValue,
    pub src: AttrValue,
}

/// Control de audio para los clips sintetizados por el backend.
/// `key` fuerza a recrear el elemento cuando cambia la fuente; si no, el
/// navegador sigue con el clip anterior cargado.
#[function_component(AudioPlayer)]
pub fn audio_player(props: &AudioPlayerProps) -> Html {
    html! {
        <div class="audio-controls">
            <h3>{format!("🔊 {}", props.title)}</h3>
            <audio controls=true key={props.src.to_string()}>
                <source src={props.src.clone()} type="audio/mpeg" />
                {"Your browser does not support the audio element."}
            </audio>
        </div>
    }
}
