// ============================================================================
// USE SESSION HOOK - Controlador de la sesión (imagen + caption + Q&A)
// ============================================================================
// Único punto donde las transiciones del SessionStore se conectan con los
// requests asíncronos. El modelo vive en un Rc<RefCell<...>> (siempre
// actual, incluso al reanudar un await); el use_state es solo el espejo que
// dispara el re-render. Cada resolución pasa por el chequeo de ticket del
// store ANTES de mutar nada.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{File, Url};
use yew::prelude::*;

use crate::services::ApiClient;
use crate::stores::SessionStore;

#[derive(Clone)]
pub struct UseSessionHandle {
    pub state: UseStateHandle<SessionStore>,
    pub upload_file: Callback<File>,
    pub ask_question: Callback<()>,
    pub set_question: Callback<String>,
    pub set_dragging: Callback<bool>,
    pub reset_session: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let snapshot = use_state(SessionStore::default);
    let model: Rc<RefCell<SessionStore>> = use_mut_ref(SessionStore::default);

    // Upload: previsualización inmediata + request de captioning
    let upload_file = {
        let model = model.clone();
        let snapshot = snapshot.clone();

        Callback::from(move |file: File| {
            let preview_url = match Url::create_object_url_with_blob(&file) {
                Ok(url) => url,
                Err(_) => {
                    log::error!("❌ No se pudo crear el object URL de la imagen");
                    return;
                }
            };

            let ticket = {
                let mut store = model.borrow_mut();
                if let Some(old) = store.preview_url.take() {
                    let _ = Url::revoke_object_url(&old);
                }
                store.begin_upload(preview_url)
            };
            snapshot.set(model.borrow().clone());

            let model = model.clone();
            let snapshot = snapshot.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match api.upload_image(&file).await {
                    Ok(response) => {
                        let applied =
                            model
                                .borrow_mut()
                                .upload_resolved(ticket, &response, api.base_url());
                        if applied {
                            log::info!("✅ Caption recibido: {}", response.caption);
                        } else {
                            log::warn!("⚠️ Caption obsoleto descartado (sesión reemplazada)");
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error subiendo imagen: {}", e);
                        model.borrow_mut().upload_failed(ticket);
                    }
                }
                snapshot.set(model.borrow().clone());
            });
        })
    };

    // Ask: pregunta sobre la imagen subida; no-op sin pregunta o sin imagen
    let ask_question = {
        let model = model.clone();
        let snapshot = snapshot.clone();

        Callback::from(move |_: ()| {
            let issued = {
                let mut store = model.borrow_mut();
                store
                    .begin_ask()
                    .map(|ticket| (ticket, store.image_path.clone(), store.question.clone()))
            };

            let Some((ticket, image_path, question)) = issued else {
                return;
            };
            snapshot.set(model.borrow().clone());

            let model = model.clone();
            let snapshot = snapshot.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match api.ask_question(&image_path, &question).await {
                    Ok(response) => {
                        let applied =
                            model
                                .borrow_mut()
                                .ask_resolved(ticket, &response, api.base_url());
                        if applied {
                            log::info!("✅ Respuesta recibida: {}", response.answer);
                        } else {
                            log::warn!("⚠️ Respuesta obsoleta descartada (pregunta reemplazada)");
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error obteniendo respuesta: {}", e);
                        model.borrow_mut().ask_failed(ticket);
                    }
                }
                snapshot.set(model.borrow().clone());
            });
        })
    };

    let set_question = {
        let model = model.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |question: String| {
            model.borrow_mut().set_question(question);
            snapshot.set(model.borrow().clone());
        })
    };

    let set_dragging = {
        let model = model.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |dragging: bool| {
            model.borrow_mut().set_dragging(dragging);
            snapshot.set(model.borrow().clone());
        })
    };

    // "Choose another file": limpieza total en un paso
    let reset_session = {
        let model = model.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |_: ()| {
            {
                let mut store = model.borrow_mut();
                if let Some(old) = store.preview_url.take() {
                    let _ = Url::revoke_object_url(&old);
                }
                store.reset();
            }
            log::info!("🗑️ Sesión reiniciada");
            snapshot.set(model.borrow().clone());
        })
    };

    UseSessionHandle {
        state: snapshot,
        upload_file,
        ask_question,
        set_question,
        set_dragging,
        reset_session,
    }
}
