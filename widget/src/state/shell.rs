#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use wire::EmbedEvent;

/// What the widget is currently showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    /// Only the avatar launcher button.
    #[default]
    Launcher,
    /// The chat panel, optionally collapsed to its header.
    Open { minimized: bool },
}

/// Launcher/panel state plus the host notifications its transitions imply.
///
/// Transitions return the [`EmbedEvent`] an iframe-embedded widget should
/// post to its host page, if any.
#[derive(Clone, Debug, Default)]
pub struct WidgetShell {
    panel: Panel,
    last_height: Option<f64>,
}

impl WidgetShell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn panel(&self) -> Panel {
        self.panel
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.panel, Panel::Open { .. })
    }

    #[must_use]
    pub fn is_minimized(&self) -> bool {
        matches!(self.panel, Panel::Open { minimized: true })
    }

    /// Expand the launcher into the chat panel. No-op if already open.
    pub fn open(&mut self) {
        if self.panel == Panel::Launcher {
            self.panel = Panel::Open { minimized: false };
        }
    }

    /// Dismiss the panel back to the launcher.
    pub fn close(&mut self) -> Option<EmbedEvent> {
        if !self.is_open() {
            return None;
        }
        self.panel = Panel::Launcher;
        self.last_height = None;
        Some(EmbedEvent::Close)
    }

    /// Collapse or expand the open panel.
    pub fn toggle_minimize(&mut self) -> Option<EmbedEvent> {
        let Panel::Open { minimized } = self.panel else {
            return None;
        };
        self.panel = Panel::Open { minimized: !minimized };
        Some(if minimized { EmbedEvent::Expand } else { EmbedEvent::Collapse })
    }

    /// Report the panel's rendered content height.
    ///
    /// Emits a resize only while open and only when the height changed.
    pub fn content_resized(&mut self, height: f64) -> Option<EmbedEvent> {
        if !self.is_open() || !height.is_finite() || height < 0.0 {
            return None;
        }
        if self.last_height.is_some_and(|prev| (prev - height).abs() < f64::EPSILON) {
            return None;
        }
        self.last_height = Some(height);
        Some(EmbedEvent::Resize { height })
    }
}
