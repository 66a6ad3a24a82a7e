//! Pling - application state and event loop

use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;

use pling_sfx::control::{EngineSynth, SoundControl, SoundCue};

use super::ui;

/// How long the toggle tooltip stays on screen.
const TOOLTIP_TTL: Duration = Duration::from_millis(1500);

/// What a surface does when activated. Each kind carries its own
/// activation sound; hover is common to all of them.
pub enum SurfaceKind {
    /// A plain button. Activation clicks.
    Button(&'static str),
    /// The form's submit control. Activation plays the success chime.
    FormSubmit,
    /// A collapsible panel. Activation flips it and plays the whoosh.
    PanelToggle { open: bool },
}

/// One interactive surface on the mock page.
///
/// Sounds are suppressible per surface and per event: a surface can keep
/// its hover cue but activate silently, or the other way round. The
/// surface still does its job either way - suppression mutes the
/// feedback, never the behavior.
pub struct Surface {
    kind: SurfaceKind,
    hover_sound: bool,
    activation_sound: bool,
}

impl Surface {
    pub fn button(label: &'static str) -> Self {
        Self::new(SurfaceKind::Button(label))
    }

    pub fn form_submit() -> Self {
        Self::new(SurfaceKind::FormSubmit)
    }

    pub fn panel_toggle() -> Self {
        Self::new(SurfaceKind::PanelToggle { open: false })
    }

    fn new(kind: SurfaceKind) -> Self {
        Self {
            kind,
            hover_sound: true,
            activation_sound: true,
        }
    }

    /// Opt this surface out of the hover cue.
    pub fn without_hover_sound(mut self) -> Self {
        self.hover_sound = false;
        self
    }

    /// Opt this surface out of its activation sound.
    pub fn without_activation_sound(mut self) -> Self {
        self.activation_sound = false;
        self
    }

    pub fn label(&self) -> String {
        match &self.kind {
            SurfaceKind::Button(name) => format!("[ {} ]", name),
            SurfaceKind::FormSubmit => "[ Submit form ]".to_string(),
            SurfaceKind::PanelToggle { open } => {
                if *open {
                    "[ Close details panel ]".to_string()
                } else {
                    "[ Open details panel ]".to_string()
                }
            }
        }
    }

    pub fn is_open_panel(&self) -> bool {
        matches!(self.kind, SurfaceKind::PanelToggle { open: true })
    }

    /// Pointer (or cursor) entered the surface.
    pub fn hover(&self, sound: &mut dyn SoundCue) {
        if self.hover_sound {
            sound.play_hover();
        }
    }

    /// Activate the surface, playing its sound unless it opted out.
    pub fn activate(&mut self, sound: &mut dyn SoundCue) {
        match &mut self.kind {
            SurfaceKind::Button(_) => {
                if self.activation_sound {
                    sound.play_click();
                }
            }
            SurfaceKind::FormSubmit => {
                if self.activation_sound {
                    sound.play_success();
                }
            }
            SurfaceKind::PanelToggle { open } => {
                *open = !*open;
                if self.activation_sound {
                    sound.play_whoosh();
                }
            }
        }
    }
}

/// Main application state
pub struct Pling {
    sound: SoundControl<EngineSynth>,
    surfaces: Vec<Surface>,
    selected: usize,
    /// Transient message after toggling the preference
    tooltip: Option<(String, Instant)>,
    should_quit: bool,
}

impl Pling {
    pub fn new() -> Self {
        Self {
            sound: SoundControl::new(),
            surfaces: vec![
                Surface::button("Get started"),
                Surface::button("Learn more"),
                // Footer-style link: present, clickable, deliberately mute
                Surface::button("Privacy policy")
                    .without_hover_sound()
                    .without_activation_sound(),
                Surface::panel_toggle(),
                Surface::form_submit(),
            ],
            selected: 0,
            tooltip: None,
            should_quit: false,
        }
    }

    /// Run the event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.expire_tooltip();

            terminal.draw(|frame| ui::render(frame, self))?;

            // Non-blocking input, ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn expire_tooltip(&mut self) {
        if let Some((_, shown_at)) = &self.tooltip {
            if shown_at.elapsed() > TOOLTIP_TTL {
                self.tooltip = None;
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected > 0 {
                    self.selected -= 1;
                    self.surfaces[self.selected].hover(&mut self.sound);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.surfaces.len() {
                    self.selected += 1;
                    self.surfaces[self.selected].hover(&mut self.sound);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.surfaces[self.selected].activate(&mut self.sound);
            }
            KeyCode::Char('a') => self.sound.play_ambient(),
            KeyCode::Char('m') => {
                // The toggle itself clicks when unmuting, nothing when muting
                self.sound.toggle();
                let message = if self.sound.enabled() {
                    "Sound on".to_string()
                } else {
                    "Sound off".to_string()
                };
                self.tooltip = Some((message, Instant::now()));
            }
            _ => {}
        }
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound.enabled()
    }

    pub fn panel_open(&self) -> bool {
        self.surfaces.iter().any(Surface::is_open_panel)
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_ref().map(|(message, _)| message.as_str())
    }
}

impl Default for Pling {
    fn default() -> Self {
        Self::new()
    }
}
