//! Verb dispatch
//!
//! The backend half of the invocation contract: takes a verb plus its
//! positional string arguments and applies it to the lighting and audio
//! controllers. All argument validation lives here; the form forwards
//! whatever the operator typed, including an empty verb.
//!
//! Verbs:
//! - `set_dmx_value <universe> <channel> <value>`
//! - `play_sound <file> <volume>`
//! - `stop_sound <file>`
//! - `stop_all_sounds`
//! - `set_volume <volume>`

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::audio::AudioHandle;
use crate::dmx::DmxController;
use crate::domain::{Configuration, CuedeckError, CuedeckResult, InvocationRequest};

#[derive(Clone)]
pub struct CommandRouter {
    dmx: Arc<Mutex<DmxController>>,
    audio: AudioHandle,
    config: Arc<Mutex<Configuration>>,
}

impl CommandRouter {
    pub fn new(
        dmx: Arc<Mutex<DmxController>>,
        audio: AudioHandle,
        config: Arc<Mutex<Configuration>>,
    ) -> Self {
        Self { dmx, audio, config }
    }

    /// Execute one request. Every successful verb resolves to the opaque
    /// value `"done"`; anything malformed rejects with a descriptive error.
    pub fn execute(&self, request: &InvocationRequest) -> CuedeckResult<Value> {
        log::info!(
            "Received command: {} with args: {:?}",
            request.verb,
            request.args
        );

        match request.verb.as_str() {
            "set_dmx_value" => self.set_dmx_value(&request.args),
            "play_sound" => self.play_sound(&request.args),
            "stop_sound" => self.stop_sound(&request.args),
            "stop_all_sounds" => self.stop_all_sounds(&request.args),
            "set_volume" => self.set_volume(&request.args),
            other => Err(CuedeckError::Command(format!("Unknown verb: {other:?}"))),
        }?;

        Ok(Value::from("done"))
    }

    fn set_dmx_value(&self, args: &[String]) -> CuedeckResult<()> {
        let [universe, channel, value] = expect_args("set_dmx_value", args)?;
        let universe = parse_arg::<usize>("universe", universe)?;
        let channel = parse_arg::<usize>("channel", channel)?;
        let value = parse_arg::<u8>("value", value)?;
        self.dmx.lock().unwrap().set_value(universe, channel, value)
    }

    fn play_sound(&self, args: &[String]) -> CuedeckResult<()> {
        let [file, volume] = expect_args("play_sound", args)?;
        let volume = parse_arg::<f32>("volume", volume)?;
        let path = self.resolve_cue_path(file);
        self.audio.play(file.clone(), path, volume)
    }

    fn stop_sound(&self, args: &[String]) -> CuedeckResult<()> {
        let [file] = expect_args("stop_sound", args)?;
        self.audio.stop(file)
    }

    fn stop_all_sounds(&self, args: &[String]) -> CuedeckResult<()> {
        expect_args::<0>("stop_all_sounds", args)?;
        self.audio.stop_all()
    }

    fn set_volume(&self, args: &[String]) -> CuedeckResult<()> {
        let [volume] = expect_args("set_volume", args)?;
        let volume = parse_arg::<f32>("volume", volume)?;
        self.audio.set_master_volume(volume)?;
        // keep the in-memory profile in sync so a later save captures it
        self.config.lock().unwrap().master_volume = volume;
        Ok(())
    }

    /// Cue files named with a relative path resolve against the profile's
    /// cue directory, when one is configured.
    fn resolve_cue_path(&self, file: &str) -> PathBuf {
        let path = PathBuf::from(file);
        if path.is_relative() {
            if let Some(dir) = &self.config.lock().unwrap().cue_dir {
                return dir.join(path);
            }
        }
        path
    }
}

/// Borrow `args` as a fixed-size array, rejecting on arity mismatch
fn expect_args<'a, const N: usize>(
    verb: &str,
    args: &'a [String],
) -> CuedeckResult<&'a [String; N]> {
    args.try_into().map_err(|_| {
        CuedeckError::Command(format!(
            "{verb} expects {N} argument(s), got {}",
            args.len()
        ))
    })
}

fn parse_arg<T>(name: &str, raw: &str) -> CuedeckResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e| CuedeckError::Command(format!("Invalid {name} {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expect_args_accepts_exact_arity() {
        let args = vec!["a".to_string(), "b".to_string()];
        let [first, second] = expect_args::<2>("verb", &args).unwrap();
        assert_eq!(first, "a");
        assert_eq!(second, "b");
    }

    #[test]
    fn expect_args_reports_expected_and_actual_counts() {
        let args = vec!["a".to_string()];
        let err = expect_args::<3>("set_dmx_value", &args).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("expects 3"), "got: {message}");
        assert!(message.contains("got 1"), "got: {message}");
    }

    #[test]
    fn parse_arg_names_the_offending_argument() {
        let err = parse_arg::<u8>("value", "loud").unwrap_err();
        assert!(err.to_string().contains("value"), "got: {err}");
    }
}
