// This example shows how to drive the drag-and-drop operations from a user interface. The
// expression is drawn on one line using the `AsciiRenderer` built into exprtree, with the selected
// node in square brackets.
//
// Usage: ascii_editor [EXPRESSION] [--dump]
//
// Keys:
//   Left/Right   select a sibling (or, while dragging, choose where to drop)
//   Up/Down      select the parent or first child
//   Space        pick up the selected node, or drop it
//   Escape       cancel a drag
//   q            quit

use std::error::Error;
use std::io::{Write, stdin, stdout};

use termion::event::Key;
use termion::input::TermRead;
use termion::raw::IntoRawMode;

use exprtree::editor::DragSession;
use exprtree::nav::NodePath;
use exprtree::render::Renderer;
use exprtree::renderers::AsciiRenderer;

const EXAMPLE_EXPRESSION: &str = "2*x+3*y+4*z+(7+6*z)";

fn main() -> Result<(), Box<dyn Error>> {
    let mut text = EXAMPLE_EXPRESSION.to_string();
    let mut show_dump = false;
    for arg in std::env::args().skip(1) {
        if arg == "--dump" {
            show_dump = true;
        } else {
            text = arg;
        }
    }

    // A parse failure is reported before the terminal goes into raw mode
    let mut tree = exprtree::parse(&text)?;

    let stdin = stdin();
    let mut stdout = stdout().into_raw_mode()?;
    let mut renderer = AsciiRenderer::default();

    // The selected node, and the drag in progress along with where it would currently be dropped
    let mut path = NodePath::default();
    let mut drag: Option<(DragSession, usize)> = None;

    draw(&mut stdout, &mut renderer, &tree, &path, drag.as_ref(), show_dump)?;

    for k in stdin.keys() {
        match (k?, drag.take()) {
            (Key::Char('q'), _) => break,

            // Dragging
            (Key::Left, Some((session, position))) =>
                drag = Some((session, position.saturating_sub(1))),
            (Key::Right, Some((session, position))) => {
                let position = session.nearest_position(position + 1);
                drag = Some((session, position));
            },
            (Key::Char(' '), Some((session, position))) =>
                path = session.commit(&mut tree, position)?,
            (Key::Esc, Some(_)) => (),
            (_, Some(in_progress)) => drag = Some(in_progress),

            // Selecting
            (Key::Left, None) => tree.move_left(&mut path)?,
            (Key::Right, None) => tree.move_right(&mut path)?,
            (Key::Up, None) => tree.move_up(&mut path)?,
            (Key::Down, None) => tree.move_down(&mut path)?,
            (Key::Char(' '), None) => {
                // The root has no siblings, so can't be dragged
                if let Ok(session) = DragSession::begin(&tree, &path) {
                    let position = session.original_position();
                    drag = Some((session, position));
                }
            },
            _ => (),
        }

        draw(&mut stdout, &mut renderer, &tree, &path, drag.as_ref(), show_dump)?;
    }

    Ok(())
}

fn draw(
    stdout: &mut impl Write,
    renderer: &mut AsciiRenderer,
    tree: &exprtree::ExpressionTree,
    path: &NodePath,
    drag: Option<&(DragSession, usize)>,
    show_dump: bool,
) -> Result<(), Box<dyn Error>> {
    write!(stdout, "{}{}", termion::cursor::Goto(1, 1), termion::clear::All)?;

    let focus = tree.node_at_path(path)?;
    renderer.draw_all(tree, Some(focus));
    write!(stdout, "{}\r\n", renderer.line)?;

    if let Some((session, position)) = drag {
        renderer.draw_all(session.preview(), None);
        write!(stdout, "\r\nDragging {}\r\n", renderer.line)?;

        if let Some(configuration) = session.configuration(*position) {
            renderer.draw_all(configuration, None);
            write!(stdout, "Drop at position {}: {}\r\n", position, renderer.line)?;
        }
    }

    if show_dump {
        write!(stdout, "\r\n===================================\r\n")?;
        for line in tree.to_string().lines() {
            write!(stdout, "{}\r\n", line)?;
        }
    }

    stdout.flush()?;
    Ok(())
}
