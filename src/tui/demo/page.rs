use crate::app::AnimationMode;
use crate::sprite::{select_frame, DrawTransform, FrameSelection};
use crate::themes::rgb_to_color;
use crate::tui::demo::state::DemoState;
use crate::tui::sprite_widget::SpriteWidget;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const HELP_TEXT: &str = "←↑↓→ move · Space attack · F/F11 fullscreen · Q quit";

pub fn draw_demo_ui(f: &mut Frame, state: &DemoState) {
    let theme = &state.config.theme;
    let size = f.area();

    f.render_widget(Block::default().bg(rgb_to_color(&theme.background)), size);

    let footer_height = if state.config.show_hud { 2 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(footer_height)].as_ref())
        .split(size);

    let stage = if state.game.fullscreen {
        chunks[0]
    } else {
        let window = centered_rect(state.config.window_cols, state.config.window_rows, chunks[0]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(rgb_to_color(&theme.border)))
            .title(Span::styled(
                format!(" {} ", state.config.window_title),
                Style::default().fg(rgb_to_color(&theme.title)),
            ))
            .title_alignment(Alignment::Center);
        let inner = block.inner(window);
        f.render_widget(block, window);
        inner
    };

    let stage_background = rgb_to_color(&theme.stage_background);
    f.render_widget(Block::default().bg(stage_background), stage);

    let selection = select_frame(&state.game, &state.layout);
    let transform = DrawTransform::for_sprite(
        state.game.x,
        state.game.y,
        state.game.facing_left,
        state.layout.frame_width,
        state.config.scale,
    );
    f.render_widget(
        SpriteWidget::new(
            &state.sheet,
            selection.source_rect(&state.layout),
            transform,
            state.input.cell_size(),
            stage_background,
        ),
        stage,
    );

    if state.config.show_hud {
        draw_hud(f, chunks[1], state, &selection);
    }
}

fn draw_hud(f: &mut Frame, area: Rect, state: &DemoState, selection: &FrameSelection) {
    let theme = &state.config.theme;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)].as_ref())
        .split(area);

    let mode_color = if selection.mode == AnimationMode::Attacking {
        rgb_to_color(&theme.attack_text)
    } else {
        rgb_to_color(&theme.hud_text)
    };
    let status = Line::from(vec![
        Span::styled(
            format!("{:<6}", selection.mode.label()),
            Style::default().fg(mode_color).bold(),
        ),
        Span::styled(
            format!(
                " row {} frame {:>2} │ x {:.0} y {:.0} │ tick {} │ touch {}",
                selection.row,
                selection.frame_index,
                state.game.x,
                state.game.y,
                state.game.tick_count,
                if state.game.touch_enabled { "on" } else { "off" },
            ),
            Style::default().fg(rgb_to_color(&theme.hud_text)),
        ),
    ]);
    f.render_widget(Paragraph::new(status).alignment(Alignment::Center), rows[0]);

    let help = Paragraph::new(Line::from(HELP_TEXT))
        .style(Style::default().fg(rgb_to_color(&theme.help_text)))
        .alignment(Alignment::Center);
    f.render_widget(help, rows[1]);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
