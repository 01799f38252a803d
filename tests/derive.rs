//! Integration test for the Operation and Payload derive macros.
#![cfg(feature = "macros")]

use gosling::{
    Dispatcher, Envelope, Operation, OperationName, Participant, ParticipantId, Payload, Registry,
    Role,
};

#[derive(Operation)]
#[allow(dead_code)]
enum EditorOp {
    Move,
    Paint(u8),
    Select { all: bool },
}

#[derive(Operation)]
struct Autosave;

#[derive(Clone, Debug, PartialEq, Payload)]
struct Brush<T: Clone + 'static> {
    size: T,
}

#[test]
fn test_derived_operation_unit() {
    assert_eq!(EditorOp::Move.name(), "Move");
}

#[test]
fn test_derived_operation_tuple() {
    assert_eq!(EditorOp::Paint(1).name(), "Paint");
}

#[test]
fn test_derived_operation_struct_variant() {
    assert_eq!(EditorOp::Select { all: true }.name(), "Select");
}

#[test]
fn test_derived_operation_on_struct() {
    assert_eq!(OperationName::new(Autosave), "autosave");
}

struct Canvas {
    id: ParticipantId,
    receivers: Registry<Canvas, Brush<u8>>,
    painted: Vec<u8>,
}

impl Participant for Canvas {
    fn id(&self) -> &ParticipantId {
        &self.id
    }

    fn role(&self) -> Role {
        Role::View
    }
}

impl Dispatcher for Canvas {
    type Payload = Brush<u8>;

    fn registry(&self) -> Option<&Registry<Self, Brush<u8>>> {
        Some(&self.receivers)
    }

    fn registry_mut(&mut self) -> Option<&mut Registry<Self, Brush<u8>>> {
        Some(&mut self.receivers)
    }
}

#[test]
fn test_enum_operations_drive_dispatch() {
    let mut canvas = Canvas {
        id: ParticipantId::new("canvas"),
        receivers: Registry::new(),
        painted: Vec::new(),
    };
    canvas.on(EditorOp::Paint(0), |c, e: &Envelope<Brush<u8>>| {
        if let Some(brush) = e.payload() {
            c.painted.push(brush.size);
        }
    });

    canvas.signal_with(EditorOp::Paint(9), Brush { size: 3 });
    canvas.signal_with("PAINT", Brush { size: 5 });
    canvas.signal_with(EditorOp::Move, Brush { size: 7 });
    assert_eq!(canvas.painted, [3, 5]);
}
