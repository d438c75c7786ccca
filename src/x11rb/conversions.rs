//! Conversions to xrats types from X11rb types
use crate::{
    pure::geometry::Rect,
    x::{
        event::ClientEventMask,
        property::{MapState, Prop, WindowAttributes, WindowClass},
    },
    Error, Result, Xid,
};
use ::x11rb::protocol::xproto::{
    self as xp, AtomEnum, EventMask, GetGeometryReply, GetPropertyReply, GetWindowAttributesReply,
};
use tracing::trace;

pub(crate) fn to_rect(reply: &GetGeometryReply) -> Rect {
    Rect::new(
        reply.x as i32,
        reply.y as i32,
        reply.width as u32,
        reply.height as u32,
    )
}

pub(crate) fn to_window_attributes(reply: &GetWindowAttributesReply) -> WindowAttributes {
    let map_state = if reply.map_state == xp::MapState::VIEWABLE {
        MapState::Viewable
    } else if reply.map_state == xp::MapState::UNVIEWABLE {
        MapState::UnViewable
    } else {
        MapState::Unmapped
    };

    let window_class = if reply.class == xp::WindowClass::INPUT_OUTPUT {
        WindowClass::InputOutput
    } else if reply.class == xp::WindowClass::INPUT_ONLY {
        WindowClass::InputOnly
    } else {
        WindowClass::CopyFromParent
    };

    WindowAttributes::new(map_state, window_class)
}

pub(crate) fn to_event_mask(mask: ClientEventMask) -> EventMask {
    let mut event_mask = EventMask::NO_EVENT;

    if mask.contains(ClientEventMask::SUBSTRUCTURE_NOTIFY) {
        event_mask = event_mask | EventMask::SUBSTRUCTURE_NOTIFY;
    }
    if mask.contains(ClientEventMask::SUBSTRUCTURE_REDIRECT) {
        event_mask = event_mask | EventMask::SUBSTRUCTURE_REDIRECT;
    }

    event_mask
}

/// Decode a raw property reply based on its reported type. Returns `None` if the property
/// is not set on the window or holds a type that xrats never reads.
pub(crate) fn to_prop(
    id: Xid,
    prop: Xid,
    utf8_string: u32,
    reply: GetPropertyReply,
) -> Result<Option<Prop>> {
    let ty = reply.type_;

    if ty == u32::from(AtomEnum::STRING) || ty == utf8_string {
        let strs = reply
            .value
            .split(|b| *b == 0)
            .filter(|s| !s.is_empty())
            .map(|s| String::from_utf8_lossy(s).into_owned())
            .collect();

        return Ok(Some(Prop::UTF8String(strs)));
    }

    if ty != u32::from(AtomEnum::ATOM) {
        trace!(%id, %prop, ty, "ignoring property of unsupported type");
        return Ok(None);
    }

    match reply.value32() {
        Some(vals) => Ok(Some(Prop::Atom(vals.map(Xid).collect()))),
        None => Err(Error::InvalidPropertyData {
            id,
            prop: prop.to_string(),
            reason: format!("expected format 32, got {}", reply.format),
        }),
    }
}
