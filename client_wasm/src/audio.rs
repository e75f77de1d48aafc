//! Click sound playback

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::error::ClientResult;

pub const CLICK_SOUND_URL: &str = "https://assets.mixkit.co/active_storage/sfx/2568/2568-preview.mp3";

/// A preloaded sound effect. Playback failures are logged and ignored.
pub struct Sound {
    element: HtmlAudioElement,
}

impl Sound {
    pub fn new(src: &str) -> ClientResult<Self> {
        let element = HtmlAudioElement::new_with_src(src)?;
        element.set_preload("auto");
        Ok(Self { element })
    }

    pub fn click() -> ClientResult<Self> {
        Self::new(CLICK_SOUND_URL)
    }

    pub fn play(&self) {
        self.element.set_current_time(0.0);
        match self.element.play() {
            Ok(promise) => {
                // Autoplay policy rejects the promise rather than throwing
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        log::warn!("Audio play error: {:?}", err);
                    }
                });
            }
            Err(err) => log::warn!("Audio play error: {:?}", err),
        }
    }
}
