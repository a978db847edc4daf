use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Painter, Shape},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};

use crate::game::{Fill, GameConfig, Label, Placement, Scene};

/// Draws scenes into a terminal frame
///
/// The play field is painted on a canvas spanning the configured window, kept
/// at its aspect ratio. Terminal cells are about twice as tall as they are
/// wide, and the half-block marker splits each one in two, so two columns per
/// row gives square pixels.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, scene: &Scene, config: &GameConfig) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let board_area = fit_board(chunks[0], config);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake! ");
        let inner = block.inner(board_area);
        frame.render_widget(block, board_area);

        let width = f64::from(config.window_width);
        let height = f64::from(config.window_height);
        let canvas = Canvas::default()
            .marker(Marker::HalfBlock)
            .background_color(Color::Black)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for shape in &scene.shapes {
                    ctx.draw(&FilledRect {
                        left: f64::from(shape.rect.left()),
                        right: f64::from(shape.rect.right()),
                        top: f64::from(shape.rect.top()),
                        bottom: f64::from(shape.rect.bottom()),
                        width,
                        height,
                        color: color(shape.fill),
                    });
                }
            });
        frame.render_widget(canvas, inner);

        for label in &scene.labels {
            let area = label_area(inner, label.placement);
            frame.render_widget(render_label(label), area);
        }

        frame.render_widget(self.render_controls(), chunks[1]);
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" to play | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A solid rectangle in window coordinates (y pointing down)
struct FilledRect {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    width: f64,
    height: f64,
    color: Color,
}

impl Shape for FilledRect {
    fn draw(&self, painter: &mut Painter) {
        let left = self.left.clamp(0.0, self.width);
        let right = self.right.clamp(0.0, self.width);
        let top = self.top.clamp(0.0, self.height);
        let bottom = self.bottom.clamp(0.0, self.height);
        if left >= right || top >= bottom {
            return;
        }

        // Canvas y grows upwards
        let corners = (
            painter.get_point(left, self.height - top),
            painter.get_point(right, self.height - bottom),
        );
        if let (Some((x0, y0)), Some((x1, y1))) = corners {
            for y in y0..=y1 {
                for x in x0..=x1 {
                    painter.paint(x, y, self.color);
                }
            }
        }
    }
}

/// Largest area inside `area` with the window's aspect ratio, centered
fn fit_board(area: Rect, config: &GameConfig) -> Rect {
    // Two columns per row keeps board units square on screen
    let aspect = 2.0 * config.window_width / config.window_height;
    let borders = 2.0;

    let max_w = f32::from(area.width.saturating_sub(2));
    let max_h = f32::from(area.height.saturating_sub(2));
    let (w, h) = if max_w / aspect <= max_h {
        (max_w, max_w / aspect)
    } else {
        (max_h * aspect, max_h)
    };

    let width = ((w + borders) as u16).min(area.width);
    let height = ((h + borders) as u16).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn label_area(inner: Rect, placement: Placement) -> Rect {
    match placement {
        Placement::TopLeft => Rect {
            x: inner.x.saturating_add(1).min(inner.right()),
            y: inner.y,
            width: inner.width.saturating_sub(1),
            height: inner.height.min(1),
        },
        Placement::Center { row } => {
            let middle = i32::from(inner.y) + i32::from(inner.height / 2) + i32::from(row);
            let last = i32::from(inner.bottom()) - 1;
            let y = middle.clamp(i32::from(inner.y), last.max(i32::from(inner.y)));
            Rect {
                x: inner.x,
                y: y as u16,
                width: inner.width,
                height: inner.height.min(1),
            }
        }
    }
}

fn render_label(label: &Label) -> Paragraph<'_> {
    let mut style = Style::default().fg(color(label.fill));
    if label.emphasized {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }

    let alignment = match label.placement {
        Placement::TopLeft => Alignment::Left,
        Placement::Center { .. } => Alignment::Center,
    };

    Paragraph::new(Line::from(Span::styled(label.text.as_str(), style))).alignment(alignment)
}

fn color(fill: Fill) -> Color {
    match fill {
        Fill::Green => Color::Green,
        Fill::Magenta => Color::Magenta,
        Fill::Red => Color::Red,
        Fill::Yellow => Color::Yellow,
    }
}
