//! Playback session - the player's single source of truth
//!
//! Owns the play queue, the current position in it and the transport flags,
//! and keeps the audio output in step with them.

use crate::{
    controls::PlayerControls,
    error::{PlaybackError, Result},
    events::{OutputEvent, SessionEvent},
    output::{AudioOutput, NullOutput},
    picker::{picker_for_seed, IndexPicker},
    progress::Progress,
    types::{PlaybackConfig, PlaybackFlags, SessionPhase, SessionSnapshot},
    volume::Volume,
};
use podcastr_core::Episode;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Playback session controller
///
/// State machine:
/// ```text
/// Idle (queue empty) ──play_single / play_from_list──▶ Loaded
/// Loaded ──next / previous / toggles──▶ Loaded
/// Loaded ──clear_player_state / ended at last episode──▶ Idle
/// ```
///
/// `current_index` is always a valid index into the queue, or 0 with an
/// empty queue. Any command that would move it out of range does nothing.
///
/// The session is created explicitly and handed by reference to whatever
/// needs it; it is the only writer of queue, index and flags.
pub struct PlaybackSession<O = NullOutput> {
    queue: Vec<Episode>,
    current_index: usize,
    flags: PlaybackFlags,

    progress: Progress,
    volume: Volume,

    output: O,
    picker: Box<dyn IndexPicker>,

    // Event queue for UI synchronization
    pending_events: Vec<SessionEvent>,
}

impl Default for PlaybackSession<NullOutput> {
    fn default() -> Self {
        Self::new(NullOutput)
    }
}

impl<O: AudioOutput> PlaybackSession<O> {
    /// Create a session with default config
    pub fn new(output: O) -> Self {
        Self::with_config(output, PlaybackConfig::default())
    }

    /// Create a session from config
    pub fn with_config(output: O, config: PlaybackConfig) -> Self {
        let picker = picker_for_seed(config.shuffle_seed);
        Self::build(output, &config, picker)
    }

    /// Create a session with a custom shuffle picker
    ///
    /// `config.shuffle_seed` is ignored.
    pub fn with_picker(output: O, config: PlaybackConfig, picker: impl IndexPicker + 'static) -> Self {
        Self::build(output, &config, Box::new(picker))
    }

    fn build(mut output: O, config: &PlaybackConfig, picker: Box<dyn IndexPicker>) -> Self {
        let volume = Volume::new(config.volume);
        output.set_volume(volume.gain());

        Self {
            queue: Vec::new(),
            current_index: 0,
            flags: PlaybackFlags {
                is_playing: false,
                is_looping: config.looping,
                is_shuffling: config.shuffling,
            },
            progress: Progress::default(),
            volume,
            output,
            picker,
            pending_events: Vec::new(),
        }
    }

    // ===== Play Commands =====

    /// Play one episode on its own
    ///
    /// Queue becomes `[episode]`, index 0, playing. Always succeeds.
    pub fn play_single(&mut self, episode: Episode) {
        debug!("Playing single episode {}", episode.id);
        self.replace_queue(vec![episode], 0);
    }

    /// Play a list starting at `index`
    ///
    /// The session keeps its own copy of the list. An out-of-range index
    /// (including any index into an empty list) is rejected without touching
    /// the session.
    pub fn play_from_list(&mut self, list: impl Into<Vec<Episode>>, index: usize) -> Result<()> {
        let list = list.into();
        if index >= list.len() {
            warn!(
                "Rejected play_from_list: index {} out of range for {} episodes",
                index,
                list.len()
            );
            return Err(PlaybackError::InvalidIndex {
                index,
                len: list.len(),
            });
        }

        debug!("Playing list of {} episodes from index {}", list.len(), index);
        self.replace_queue(list, index);
        Ok(())
    }

    fn replace_queue(&mut self, queue: Vec<Episode>, index: usize) {
        let phase_before = self.phase();
        let previous_id = self.current_episode_id();

        self.queue = queue;
        self.current_index = index;
        self.flags.is_playing = true;

        self.pending_events.push(SessionEvent::QueueChanged {
            length: self.queue.len(),
        });
        self.load_current(previous_id);
        self.emit_phase_change(phase_before);
    }

    // ===== Transport =====

    /// Flip play/pause
    ///
    /// The flag flips even with an empty queue; the output is only commanded
    /// when there is something loaded.
    pub fn toggle_play(&mut self) {
        let phase_before = self.phase();
        let was_playing = self.flags.is_playing;
        self.flags.is_playing = !self.flags.is_playing;

        if self.queue.is_empty() {
            debug!("toggle_play with empty queue, output left alone");
        } else if self.flags.is_playing {
            self.output.play();
        } else {
            self.output.pause();
        }

        self.emit_playing_change(phase_before, was_playing);
    }

    /// Record a play/pause that the output performed on its own
    ///
    /// The output is not commanded back, so reports cannot loop.
    pub fn set_playing_state(&mut self, playing: bool) {
        let phase_before = self.phase();
        let was_playing = self.flags.is_playing;
        self.flags.is_playing = playing;
        self.emit_playing_change(phase_before, was_playing);
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.flags.is_looping = !self.flags.is_looping;
        self.pending_events.push(SessionEvent::LoopChanged {
            enabled: self.flags.is_looping,
        });
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.flags.is_shuffling = !self.flags.is_shuffling;
        self.pending_events.push(SessionEvent::ShuffleChanged {
            enabled: self.flags.is_shuffling,
        });
    }

    /// Whether a previous episode exists (independent of shuffle)
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Whether "next" is available
    ///
    /// Always true while shuffling, since next is a fresh random pick.
    pub fn has_next(&self) -> bool {
        self.flags.is_shuffling || self.current_index + 1 < self.queue.len()
    }

    /// Advance to the next episode
    ///
    /// Shuffling picks a random position (possibly the current one, which
    /// then restarts). Sequential mode steps forward and does nothing at the
    /// last episode.
    pub fn play_next(&mut self) {
        if self.queue.is_empty() {
            debug!("play_next with empty queue ignored");
            return;
        }

        if self.flags.is_shuffling {
            let index = self.picker.pick(self.queue.len());
            self.jump_to(index);
        } else if self.has_next() {
            self.jump_to(self.current_index + 1);
        } else {
            debug!("play_next at last episode ignored");
        }
    }

    /// Go back to the previous episode
    ///
    /// Shuffling picks a random position, like `play_next`. Sequential mode
    /// steps back and does nothing at the first episode.
    pub fn play_previous(&mut self) {
        if self.queue.is_empty() {
            debug!("play_previous with empty queue ignored");
            return;
        }

        if self.flags.is_shuffling {
            let index = self.picker.pick(self.queue.len());
            self.jump_to(index);
        } else if self.has_previous() {
            self.jump_to(self.current_index - 1);
        } else {
            debug!("play_previous at first episode ignored");
        }
    }

    /// Empty the queue
    ///
    /// Flags are left as they are; the output is paused so nothing keeps
    /// sounding.
    pub fn clear_player_state(&mut self) {
        let phase_before = self.phase();
        let had_episodes = !self.queue.is_empty();

        self.queue.clear();
        self.current_index = 0;
        self.progress = Progress::default();

        if had_episodes {
            self.output.pause();
        }

        debug!("Player state cleared");
        self.pending_events.push(SessionEvent::QueueCleared);
        self.emit_phase_change(phase_before);
    }

    /// Seek within the current episode
    ///
    /// With an empty queue this does nothing. Positions past the end of the
    /// episode are rejected.
    pub fn seek(&mut self, position: Duration) -> Result<()> {
        if self.queue.is_empty() {
            debug!("seek with empty queue ignored");
            return Ok(());
        }

        let duration_secs = self.progress.duration_secs();
        if duration_secs > 0 && position.as_secs() > duration_secs {
            warn!(
                "Rejected seek to {:?} past episode end ({}s)",
                position, duration_secs
            );
            return Err(PlaybackError::InvalidSeekPosition(position));
        }

        self.output.seek(position);
        self.progress.update(position.as_secs());
        self.emit_progress();
        Ok(())
    }

    // ===== Output Events =====

    /// Feed a notification from the audio output into the session
    pub fn handle_output_event(&mut self, event: OutputEvent) {
        match event {
            OutputEvent::Ready { duration_secs } => self.handle_ready(duration_secs),
            OutputEvent::TimeUpdate { position_secs } => self.handle_time_update(position_secs),
            OutputEvent::Ended => self.handle_episode_ended(),
            OutputEvent::Started => self.set_playing_state(true),
            OutputEvent::Paused => self.set_playing_state(false),
        }
    }

    /// React to the current episode finishing
    ///
    /// Looping restarts the episode. Otherwise the queue advances when it
    /// can, and the session returns to idle when it cannot.
    pub fn handle_episode_ended(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        if self.flags.is_looping {
            debug!("Episode ended while looping, restarting");
            let phase_before = self.phase();
            self.progress.rewind();
            self.output.seek(Duration::ZERO);
            self.output.play();
            self.flags.is_playing = true;
            self.emit_progress();
            self.emit_phase_change(phase_before);
        } else if self.has_next() {
            self.play_next();
        } else {
            debug!("Reached end of queue");
            self.clear_player_state();
        }
    }

    fn handle_ready(&mut self, duration_secs: u64) {
        if self.queue.is_empty() {
            return;
        }

        if duration_secs > 0 {
            self.progress.set_duration(duration_secs);
        }
        self.progress.rewind();
        self.output.seek(Duration::ZERO);
        self.emit_progress();
    }

    fn handle_time_update(&mut self, position_secs: u64) {
        if self.queue.is_empty() {
            return;
        }

        self.progress.update(position_secs);
        trace!("Position {}s", self.progress.position_secs());
        self.emit_progress();
    }

    // ===== Volume =====

    /// Set volume (0-100)
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        self.apply_volume();
    }

    /// Current volume (0-100)
    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    /// Mute output
    pub fn mute(&mut self) {
        self.volume.mute();
        self.apply_volume();
    }

    /// Unmute output
    pub fn unmute(&mut self) {
        self.volume.unmute();
        self.apply_volume();
    }

    /// Toggle mute
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.apply_volume();
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    fn apply_volume(&mut self) {
        self.output.set_volume(self.volume.gain());
        self.pending_events.push(SessionEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    // ===== State Queries =====

    /// Episodes in playback order
    pub fn queue(&self) -> &[Episode] {
        &self.queue
    }

    /// Index of the current episode (0 when idle)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Episode being played, if any
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.get(self.current_index)
    }

    /// Transport flags
    pub fn flags(&self) -> PlaybackFlags {
        self.flags
    }

    /// Check if playing
    pub fn is_playing(&self) -> bool {
        self.flags.is_playing
    }

    /// Check if looping
    pub fn is_looping(&self) -> bool {
        self.flags.is_looping
    }

    /// Check if shuffling
    pub fn is_shuffling(&self) -> bool {
        self.flags.is_shuffling
    }

    /// Coarse state
    pub fn phase(&self) -> SessionPhase {
        if self.queue.is_empty() {
            SessionPhase::Idle
        } else if self.flags.is_playing {
            SessionPhase::Playing
        } else {
            SessionPhase::Paused
        }
    }

    /// Position in the current episode
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Which player buttons are enabled
    pub fn controls(&self) -> PlayerControls {
        PlayerControls::evaluate(self.queue.len(), self.has_next(), self.has_previous())
    }

    /// Owned copy of everything a renderer needs
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            queue: self.queue.clone(),
            current_index: self.current_index,
            current_episode: self.current_episode().cloned(),
            flags: self.flags,
            phase: self.phase(),
            has_next: self.has_next(),
            has_previous: self.has_previous(),
            position_secs: self.progress.position_secs(),
            duration_secs: self.progress.duration_secs(),
            volume: self.volume.level(),
            muted: self.volume.is_muted(),
            controls: self.controls(),
        }
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// The audio output
    pub fn output(&self) -> &O {
        &self.output
    }

    /// The audio output, mutably
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    // ===== Internal =====

    /// Make `index` current and (re)load it; loading a new source autoplays
    fn jump_to(&mut self, index: usize) {
        let phase_before = self.phase();
        let previous_id = self.current_episode_id();

        self.current_index = index;
        self.flags.is_playing = true;

        self.load_current(previous_id);
        self.emit_phase_change(phase_before);
    }

    fn load_current(&mut self, previous_episode_id: Option<String>) {
        let Some(episode) = self.queue.get(self.current_index) else {
            return;
        };

        debug!(
            "Loading episode {} ({}/{})",
            episode.id,
            self.current_index + 1,
            self.queue.len()
        );

        self.progress = Progress::start(episode.duration_secs);
        self.output.load(&episode.url);
        if self.flags.is_playing {
            self.output.play();
        }

        self.pending_events.push(SessionEvent::EpisodeChanged {
            episode_id: episode.id.to_string(),
            previous_episode_id,
        });
    }

    fn current_episode_id(&self) -> Option<String> {
        self.current_episode().map(|episode| episode.id.to_string())
    }

    fn emit_phase_change(&mut self, before: SessionPhase) {
        let phase = self.phase();
        if phase != before {
            self.pending_events.push(SessionEvent::StateChanged { phase });
        }
    }

    // The phase hides the play flag while idle
    fn emit_playing_change(&mut self, phase_before: SessionPhase, was_playing: bool) {
        self.emit_phase_change(phase_before);
        if self.queue.is_empty() && self.flags.is_playing != was_playing {
            self.pending_events.push(SessionEvent::PlayingChanged {
                is_playing: self.flags.is_playing,
            });
        }
    }

    fn emit_progress(&mut self) {
        self.pending_events.push(SessionEvent::ProgressUpdate {
            position_secs: self.progress.position_secs(),
            duration_secs: self.progress.duration_secs(),
        });
    }
}
