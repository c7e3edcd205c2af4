use crate::colour::{unpack_rgb, OFF};
use crate::display::{LedLayout, NeopixelFrame};
use crate::game::{Board, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Colour a terminal cell the way the LED under it is lit.
pub fn led_style(packed: u32) -> Style {
    if packed == OFF {
        return Style::default().fg(Color::DarkGray);
    }
    let c = unpack_rgb(packed);
    Style::default().fg(Color::Rgb(c.r, c.g, c.b))
}

/// Build the board lines: column numbers, bordered LED grid and a cursor
/// marker under `cursor`. The cursor column's top LED previews the mover's
/// colour.
pub fn board_lines(board: &Board, layout: LedLayout, cursor: Option<(usize, Player)>) -> Vec<Line<'static>> {
    let mut leds = NeopixelFrame::from_board(board, layout);
    if let Some((col, player)) = cursor {
        leds.highlight_column(col, player.colour().neopixel_colour());
    }
    let selected = cursor.map(|(col, _)| col);

    let mut lines = Vec::with_capacity(ROWS + 4);

    let mut col_line = vec![Span::raw("   ")]; // Padding to match "  ║"
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if Some(col) == selected {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(COLS * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            let packed = leds.at(row, col);
            let symbol = if packed == OFF { " . " } else { " ● " };
            row_spans.push(Span::styled(symbol, led_style(packed)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if Some(col) == selected {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

pub fn render_board(
    frame: &mut Frame,
    board: &Board,
    layout: LedLayout,
    cursor: Option<(usize, Player)>,
    area: Rect,
) {
    let widget = Paragraph::new(board_lines(board, layout, cursor)).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::PlayerColour;

    #[test]
    fn test_led_style_uses_packed_channels() {
        assert_eq!(led_style(0xFF0000).fg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(led_style(0xFFFF00).fg, Some(Color::Rgb(255, 255, 0)));
        assert_eq!(led_style(0x000000).fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_board_lines_shape() {
        let lines = board_lines(&Board::new(), LedLayout::RowMajor, None);
        assert_eq!(lines.len(), ROWS + 4);
        // Padding, eight cells, closing border
        assert_eq!(lines[2].spans.len(), COLS + 2);
    }

    #[test]
    fn test_piece_and_cursor_preview() {
        let mut board = Board::new();
        board.drop_piece(0, PlayerColour::Yellow).unwrap();
        let lines = board_lines(&board, LedLayout::Serpentine, Some((3, Player::Red)));

        // Bottom board row is lines[2 + 7]; cell spans start after padding.
        let bottom = &lines[2 + ROWS - 1];
        assert_eq!(bottom.spans[1].content, " ● ");
        assert_eq!(bottom.spans[1].style.fg, Some(Color::Rgb(255, 255, 0)));

        // Top row, column 3 shows a dim red preview.
        let top = &lines[2];
        assert_eq!(top.spans[4].style.fg, Some(Color::Rgb(63, 0, 0)));
    }
}
