//! Audio playback on a dedicated thread.
//!
//! Raylib's audio device is owned by a single background thread started in
//! [`crate::resources::audio::setup_audio`]; the ECS side communicates over
//! lock-free channels. Systems write [`AudioCmd`] messages, a forwarding
//! system pushes them across the bridge, and responses drain back into the
//! `Messages<AudioMessage>` mailbox each frame.
//!
//! Only short sound effects are supported: the demos trigger clips, nothing
//! more.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use raylib::core::audio::{RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

/// Drain pending events from the audio thread into the ECS mailbox.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

/// Forward ECS [`AudioCmd`] messages to the audio thread.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Ignore send errors during shutdown.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`].
pub fn update_bevy_audio_cmds(mut messages: ResMut<Messages<AudioCmd>>) {
    messages.update();
}

/// Entry point of the dedicated audio thread.
///
/// Initializes the audio device, owns all `Sound` handles, reacts to
/// [`AudioCmd`] inputs, and reports state changes as [`AudioMessage`]s.
/// Playback requests for ids that failed to load are logged and dropped.
/// Blocks until [`AudioCmd::Shutdown`] arrives.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            // Without a device there is nothing to do; drain commands so
            // senders never block, and exit on shutdown.
            log::error!("failed to initialize audio device: {}", e);
            for cmd in rx_cmd.iter() {
                if matches!(cmd, AudioCmd::Shutdown) {
                    return;
                }
            }
            return;
        }
    };

    log::info!("audio thread started");

    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();

    'run: loop {
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        log::debug!("fx loaded id='{}' path='{}'", id, path);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        log::warn!("fx load failed id='{}' path='{}': {}", id, path, e);
                        let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        sound.play();
                        playing.insert(id);
                    } else {
                        log::debug!("fx play ignored id='{}': not loaded", id);
                    }
                }
                AudioCmd::UnloadAllFx => {
                    sounds.clear();
                    playing.clear();
                    let _ = tx_msg.send(AudioMessage::FxUnloadedAll);
                }
                AudioCmd::Shutdown => {
                    sounds.clear();
                    playing.clear();
                    let _ = tx_msg.send(AudioMessage::FxUnloadedAll);
                    break 'run;
                }
            }
        }

        // Detect finished effects so listeners see each end exactly once.
        let ended: Vec<String> = playing
            .iter()
            .filter(|id| {
                sounds
                    .get(id.as_str())
                    .map(|sound| !sound.is_playing())
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        for id in ended {
            playing.remove(&id);
            let _ = tx_msg.send(AudioMessage::FxFinished { id });
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    log::info!("audio thread exiting");
    // Sounds drop before `audio`, satisfying the device lifetime.
}
