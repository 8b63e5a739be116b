use crate::console::surface::ConsoleSurface;
use crate::domain::audio::{AudioSubsystem, SharedAudio, SubsystemError};
use crate::domain::color::Color;
use crate::domain::device::{DeviceContext, LightSettings, SpeakerSettings};
use crate::domain::error_reporter::ErrorReporter;
use crate::domain::errors::DeviceError;
use crate::domain::surface::{ControlId, ControlInput, SharedSurface, Surface};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A console surface, a recording audio subsystem and a recording reporter wired together.
pub struct TestPanel {
    surface: Rc<RefCell<ConsoleSurface>>,
    audio: Rc<RefCell<RecordingMixer>>,
    reporter: Rc<RecordingReporter>,
}

impl TestPanel {
    pub fn new() -> Self {
        TestPanel {
            surface: Rc::new(RefCell::new(ConsoleSurface::new("Test panel"))),
            audio: Rc::new(RefCell::new(RecordingMixer::default())),
            reporter: Rc::new(RecordingReporter::default()),
        }
    }

    pub fn with_failing_audio() -> Self {
        let panel = TestPanel::new();
        panel.audio.borrow_mut().fail_init = true;
        panel
    }

    pub fn context(&self) -> DeviceContext {
        let surface: SharedSurface = self.surface.clone();
        let audio: SharedAudio = self.audio.clone();

        DeviceContext::new(
            surface,
            audio,
            self.reporter.clone(),
            LightSettings::new(Color::RGB(255, 255, 0), Color::RGB(0, 0, 0)),
            SpeakerSettings::new("background_music.mp3", 100.0),
        )
    }

    pub fn surface(&self) -> &Rc<RefCell<ConsoleSurface>> {
        &self.surface
    }

    pub fn audio(&self) -> &Rc<RefCell<RecordingMixer>> {
        &self.audio
    }

    pub fn reporter(&self) -> &RecordingReporter {
        &self.reporter
    }

    pub fn press(&self, control: ControlId) -> Result<(), DeviceError> {
        self.activate(control, ControlInput::Press)
    }

    pub fn slide(&self, control: ControlId, raw: &str) -> Result<(), DeviceError> {
        self.activate(control, ControlInput::Slide(raw.to_string()))
    }

    fn activate(&self, control: ControlId, input: ControlInput) -> Result<(), DeviceError> {
        let callback = self.surface.borrow().callback(control).expect("unknown control");
        callback(&input)
    }
}

#[derive(PartialEq, Debug, Clone)]
pub enum AudioCall {
    Init,
    Load(PathBuf),
    Play { looping: bool },
    Stop,
    SetVolume(f64),
}

#[derive(Default, Debug)]
pub struct RecordingMixer {
    calls: Vec<AudioCall>,
    fail_init: bool,
    fail_load: bool,
    volume: f64,
    looping: bool,
}

impl RecordingMixer {
    pub fn calls(&self) -> &[AudioCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn fail_load(&mut self) {
        self.fail_load = true;
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

impl AudioSubsystem for RecordingMixer {
    fn init(&mut self) -> Result<(), SubsystemError> {
        self.calls.push(AudioCall::Init);
        if self.fail_init { Err(SubsystemError::NoDevice) } else { Ok(()) }
    }

    fn load(&mut self, source: &Path) -> Result<(), SubsystemError> {
        self.calls.push(AudioCall::Load(source.to_path_buf()));
        if self.fail_load {
            return Err(SubsystemError::Load {
                path: source.display().to_string(),
                reason: "file not found".to_string(),
            });
        }
        Ok(())
    }

    fn play(&mut self, looping: bool) -> Result<(), SubsystemError> {
        self.calls.push(AudioCall::Play { looping });
        self.looping = looping;
        Ok(())
    }

    fn stop(&mut self) {
        self.calls.push(AudioCall::Stop);
        self.looping = false;
    }

    fn set_volume(&mut self, volume: f64) {
        self.calls.push(AudioCall::SetVolume(volume));
        self.volume = volume;
    }
}

#[derive(Default, Debug)]
pub struct RecordingReporter {
    reports: RefCell<Vec<(String, String)>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<(String, String)> {
        self.reports.borrow().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report_error(&self, title: &str, message: &str) {
        self.reports.borrow_mut().push((title.to_string(), message.to_string()));
    }
}
