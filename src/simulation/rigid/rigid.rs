use crate::rigid_body::{BodyDescriptor, BodyId};
use crate::scenes::InitialBody;

use super::Session;

pub(super) fn spawn_user_body(session: &mut Session, descriptor: BodyDescriptor) -> BodyId {
    // Captured before insertion so reset restores exactly this point.
    let initial_position = descriptor.position;
    let id = session.engine.world.add_body(descriptor);
    session.user_bodies.push(InitialBody {
        body: id,
        initial_position,
    });
    id
}
