use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct ShellRects {
    pub top: Rect,
    pub hero: Rect,
    pub hud: Rect,
    pub hud_keys: Rect,
    pub hud_params: Rect,
    pub hud_activity: Rect,
}

/// Split `area` into a one-line top bar, the face hero, and a three-column HUD.
///
/// The HUD shrinks before the hero does, but never below 3 rows.
pub fn shell_layout(area: Rect, hud_height: u16) -> ShellRects {
    let hud_height = hud_height.min(area.height / 3).max(3);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),          // top bar
            Constraint::Min(1),             // hero
            Constraint::Length(hud_height), // hud
        ])
        .split(area);

    let hud = chunks[2];
    let hud_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(hud);

    ShellRects {
        top: chunks[0],
        hero: chunks[1],
        hud,
        hud_keys: hud_cols[0],
        hud_params: hud_cols[1],
        hud_activity: hud_cols[2],
    }
}
