use crate::dom::js_err;
use snowbound_core::{Soundscape, StoryEvent, PROCESSOR_BLOCK_SIZE};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Hosts the soundscape inside a WebAudio script processor.
///
/// The AudioContext is created on the first enable click; the scenes are
/// rendered in Rust one processor block at a time.
pub struct AudioHost {
    soundscape: Rc<RefCell<Soundscape>>,
    ctx: RefCell<Option<web::AudioContext>>,
    processor: RefCell<Option<web::ScriptProcessorNode>>,
}

impl AudioHost {
    pub fn new(seed: u64) -> Self {
        Self {
            soundscape: Rc::new(RefCell::new(Soundscape::new(seed))),
            ctx: RefCell::new(None),
            processor: RefCell::new(None),
        }
    }

    /// Create or resume the context and build the scenes.
    ///
    /// Safe to call on every click; returns true only when the scenes were
    /// built by this call.
    pub async fn enable(&self) -> anyhow::Result<bool> {
        let existing = self.ctx.borrow().clone();
        let ctx = match existing {
            Some(ctx) => ctx,
            None => {
                let ctx = web::AudioContext::new().map_err(js_err)?;
                *self.ctx.borrow_mut() = Some(ctx.clone());
                ctx
            }
        };
        if ctx.state() == web::AudioContextState::Suspended {
            let promise = ctx.resume().map_err(js_err)?;
            JsFuture::from(promise).await.map_err(js_err)?;
        }
        let sample_rate = ctx.sample_rate();
        let built = self.soundscape.borrow_mut().initialize(sample_rate)?;
        if built {
            self.connect_processor(&ctx)?;
            log::info!("[audio] soundscape running at {} Hz", sample_rate);
        }
        Ok(built)
    }

    #[allow(deprecated)]
    fn connect_processor(&self, ctx: &web::AudioContext) -> anyhow::Result<()> {
        let node = ctx
            .create_script_processor_with_buffer_size_and_number_of_input_channels_and_number_of_output_channels(
                PROCESSOR_BLOCK_SIZE as u32,
                0,
                1,
            )
            .map_err(js_err)?;
        let soundscape = self.soundscape.clone();
        let mut block: Vec<f32> = vec![0.0; PROCESSOR_BLOCK_SIZE];
        let on_process = Closure::wrap(Box::new(move |ev: web::AudioProcessingEvent| {
            let out = match ev.output_buffer() {
                Ok(b) => b,
                Err(e) => {
                    log::error!("[audio] output buffer: {:?}", e);
                    return;
                }
            };
            let len = out.length() as usize;
            if block.len() != len {
                block.resize(len, 0.0);
            }
            soundscape.borrow_mut().render(&mut block);
            for ch in 0..out.number_of_channels() {
                let _ = out.copy_to_channel(&mut block, ch as i32);
            }
        }) as Box<dyn FnMut(_)>);
        node.set_onaudioprocess(Some(on_process.as_ref().unchecked_ref()));
        on_process.forget();
        node.connect_with_audio_node(&ctx.destination())
            .map_err(js_err)?;
        *self.processor.borrow_mut() = Some(node);
        Ok(())
    }

    /// Apply the audio-facing story events; the rest are ignored.
    pub fn apply(&self, events: &[StoryEvent]) {
        let mut scape = self.soundscape.borrow_mut();
        for ev in events {
            match ev {
                StoryEvent::SceneRequested(i) => {
                    if scape.set_scene(*i) {
                        log::debug!("[audio] scene {}", i);
                    }
                }
                StoryEvent::SceneRearmed(i) => {
                    scape.restart_scene(*i);
                }
                StoryEvent::AudioStopped => scape.stop_all(),
                _ => {}
            }
        }
    }
}
