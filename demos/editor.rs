//! A tiny tile editor wired with Gosling signals.
//!
//! A drag gesture becomes fill and erase signals on the board model. A worker
//! thread then posts an autosave notice to the screen through a mailbox.
//!
//! `cargo run --example editor` (logs at TRACE, so every dispatch is visible)

use std::collections::BTreeMap;

use gosling::{
    AppContext, Catalog, Config, Dispatcher, Envelope, Operation, Participant, ParticipantId,
    Payload, Registry, Result, Role,
    geometry::{Drag, Point2, Rect},
};

#[derive(Operation)]
enum EditorOp {
    Fill,
    Erase,
    Changed,
}

#[derive(Clone, Debug, Payload)]
enum Edit {
    Area(Rect),
    Count(usize),
    None,
}

struct Board {
    id: ParticipantId,
    receivers: Registry<Board, Edit>,
    tiles: BTreeMap<(i32, i32), char>,
}

impl Board {
    fn new(ctx: &mut AppContext) -> Result<Self> {
        let mut board = Board {
            id: ctx.participant_id("board")?,
            receivers: Registry::new(),
            tiles: BTreeMap::new(),
        };
        board.on(EditorOp::Fill, |b, e| b.paint(e, Some('#')));
        board.on(EditorOp::Erase, |b, e| b.paint(e, None));
        Ok(board)
    }

    fn paint(&mut self, envelope: &Envelope<Edit>, tile: Option<char>) {
        let Some(Edit::Area(area)) = envelope.payload() else {
            return;
        };
        for y in area.origin.y..area.origin.y + area.height as i32 {
            for x in area.origin.x..area.origin.x + area.width as i32 {
                match tile {
                    Some(t) => self.tiles.insert((x, y), t),
                    None => self.tiles.remove(&(x, y)),
                };
            }
        }
    }
}

impl Participant for Board {
    fn id(&self) -> &ParticipantId {
        &self.id
    }

    fn role(&self) -> Role {
        Role::Model
    }
}

impl Dispatcher for Board {
    type Payload = Edit;

    fn registry(&self) -> Option<&Registry<Self, Edit>> {
        Some(&self.receivers)
    }

    fn registry_mut(&mut self) -> Option<&mut Registry<Self, Edit>> {
        Some(&mut self.receivers)
    }
}

struct Screen {
    id: ParticipantId,
    receivers: Registry<Screen, Edit>,
    title: String,
}

impl Participant for Screen {
    fn id(&self) -> &ParticipantId {
        &self.id
    }

    fn role(&self) -> Role {
        Role::View
    }
}

impl Dispatcher for Screen {
    type Payload = Edit;

    fn registry(&self) -> Option<&Registry<Self, Edit>> {
        Some(&self.receivers)
    }

    fn registry_mut(&mut self) -> Option<&mut Registry<Self, Edit>> {
        Some(&mut self.receivers)
    }

    fn on_update(&mut self, envelope: &Envelope<Edit>) {
        println!(
            "[{}] {} from {:?}: {:?}",
            self.title,
            envelope.operation(),
            envelope.origin(),
            envelope.payload()
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut ctx = AppContext::new(Config::default().with_max_signals_per_drain(8))?;
    ctx.set_strings("en", [("title.main", "Tile Editor")])?;

    let mut tools = Catalog::<EditorOp, ()>::new();
    tools.register("tool.fill", |_| EditorOp::Fill)?;
    tools.register("tool.erase", |_| EditorOp::Erase)?;

    let mut board = Board::new(&mut ctx)?;
    let mut screen = Screen {
        id: ctx.participant_id("screen")?,
        receivers: Registry::new(),
        title: ctx.localize("title.main").to_string(),
    };
    screen.on(EditorOp::Changed, |s, _| s.title.push('*'));

    let mut drag = Drag::start(Point2::new(1, 1));
    drag.move_to(Point2::new(4, 3));
    board.signal_with(tools.build("tool.fill", &())?, Edit::Area(drag.selection()));
    board.signal_with(
        tools.build("tool.erase", &())?,
        Edit::Area(Rect::new(Point2::new(2, 2), 1, 1)),
    );
    board.signal_with("rotate", Edit::None);

    // Autosave progress from a worker thread, delivered on this thread.
    let (poster, mut mailbox) = ctx.mailbox::<Edit>();
    let tiles = board.tiles.len();
    let board_id = board.id().clone();
    let worker = std::thread::spawn(move || {
        let saved = Envelope::model(board_id, EditorOp::Changed).with_payload(Edit::Count(tiles));
        poster.blocking_post(saved)
    });
    worker.join().expect("autosave worker panicked")?;
    mailbox.drain(&mut screen);

    println!("{} tiles painted, title is now {:?}", board.tiles.len(), screen.title);
    ctx.shutdown();
    Ok(())
}
