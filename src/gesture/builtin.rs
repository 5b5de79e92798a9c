use super::GestureDescription;
use crate::types::{
    CurlCategory::{FullCurl, HalfCurl, NoCurl},
    DirectionCategory::*,
    Finger::{self, Index, Middle, Pinky, Ring, Thumb},
};

const ALL: &[Finger] = &Finger::ALL;
const FOUR: &[Finger] = &[Index, Middle, Ring, Pinky];
const LOWER_THREE: &[Finger] = &[Middle, Ring, Pinky];

pub(super) fn descriptions() -> Vec<GestureDescription> {
    vec![
        victory(),
        thumbs_up(),
        thumbs_down(),
        middle_finger(),
        ok_sign(),
        pinched_finger(),
        pinched_hand(),
        raised_hand(),
        love_you(),
        rock_on(),
        call_me(),
        point_right(),
        point_up(),
        point_left(),
        point_down(),
        raised_fist(),
        hello(),
        thank_you(),
    ]
}

/// Fingers tucked into the palm, tolerating a loose fist.
fn curled(desc: GestureDescription, fingers: &[Finger]) -> GestureDescription {
    desc.add_curl_all(fingers, FullCurl, 1.0)
        .add_curl_all(fingers, HalfCurl, 0.9)
}

fn victory() -> GestureDescription {
    GestureDescription::new("victory")
        .add_curl(Thumb, HalfCurl, 0.5)
        .add_curl(Thumb, NoCurl, 0.5)
        .add_direction(Thumb, VerticalUp, 1.0)
        .add_direction(Thumb, DiagonalUpLeft, 1.0)
        .add_direction(Thumb, DiagonalUpRight, 1.0)
        .add_curl(Index, NoCurl, 1.0)
        .add_direction(Index, VerticalUp, 0.75)
        .add_direction(Index, DiagonalUpLeft, 1.0)
        .add_direction(Index, DiagonalUpRight, 1.0)
        .add_curl(Middle, NoCurl, 1.0)
        .add_direction(Middle, VerticalUp, 1.0)
        .add_direction(Middle, DiagonalUpLeft, 0.75)
        .add_direction(Middle, DiagonalUpRight, 0.75)
        .add_curl_all(&[Ring, Pinky], FullCurl, 1.0)
}

fn thumbs_up() -> GestureDescription {
    let desc = GestureDescription::new("thumbs_up")
        .add_curl(Thumb, NoCurl, 1.0)
        .add_direction(Thumb, VerticalUp, 1.0)
        .add_direction(Thumb, DiagonalUpLeft, 1.0)
        .add_direction(Thumb, DiagonalUpRight, 1.0);
    curled(desc, FOUR)
}

fn thumbs_down() -> GestureDescription {
    let desc = GestureDescription::new("thumbs_down")
        .add_curl(Thumb, NoCurl, 1.0)
        .add_direction(Thumb, VerticalDown, 1.0)
        .add_direction(Thumb, DiagonalDownLeft, 1.0)
        .add_direction(Thumb, DiagonalDownRight, 1.0);
    curled(desc, FOUR)
}

fn middle_finger() -> GestureDescription {
    let desc = GestureDescription::new("middle_finger")
        .add_curl(Middle, NoCurl, 1.0)
        .add_direction(Middle, VerticalUp, 1.0)
        .add_direction(Middle, DiagonalUpLeft, 0.8)
        .add_direction(Middle, DiagonalUpRight, 0.8);
    curled(desc, &[Thumb, Index, Ring, Pinky])
}

fn ok_sign() -> GestureDescription {
    GestureDescription::new("ok_sign")
        .add_curl(Thumb, HalfCurl, 1.0)
        .add_curl(Thumb, NoCurl, 0.6)
        .add_curl(Index, HalfCurl, 1.0)
        .add_curl(Index, FullCurl, 0.8)
        .add_curl_all(LOWER_THREE, NoCurl, 1.0)
        .add_direction_all(LOWER_THREE, VerticalUp, 1.0)
        .add_direction_all(LOWER_THREE, DiagonalUpLeft, 0.8)
        .add_direction_all(LOWER_THREE, DiagonalUpRight, 0.8)
}

fn pinched_finger() -> GestureDescription {
    GestureDescription::new("pinched_finger")
        .add_curl_all(ALL, HalfCurl, 1.0)
        .add_curl_all(ALL, FullCurl, 0.5)
        .add_direction_all(ALL, VerticalUp, 1.0)
        .add_direction_all(ALL, Forward, 0.8)
}

fn pinched_hand() -> GestureDescription {
    let desc = GestureDescription::new("pinched_hand")
        .add_curl(Thumb, NoCurl, 1.0)
        .add_curl(Thumb, HalfCurl, 0.8)
        .add_curl(Index, HalfCurl, 1.0)
        .add_curl(Index, NoCurl, 0.5)
        .add_direction_all(&[Thumb, Index], HorizontalLeft, 1.0)
        .add_direction_all(&[Thumb, Index], HorizontalRight, 1.0)
        .add_direction_all(&[Thumb, Index], DiagonalUpLeft, 0.8)
        .add_direction_all(&[Thumb, Index], DiagonalUpRight, 0.8);
    desc.add_curl_all(LOWER_THREE, FullCurl, 1.0)
}

fn raised_hand() -> GestureDescription {
    GestureDescription::new("raised_hand")
        .add_curl_all(ALL, NoCurl, 1.0)
        .add_direction(Thumb, HorizontalLeft, 1.0)
        .add_direction(Thumb, HorizontalRight, 1.0)
        .add_direction(Thumb, DiagonalUpLeft, 1.0)
        .add_direction(Thumb, DiagonalUpRight, 1.0)
        .add_direction_all(FOUR, VerticalUp, 1.0)
        .add_direction_all(FOUR, DiagonalUpLeft, 0.8)
        .add_direction_all(FOUR, DiagonalUpRight, 0.8)
}

fn love_you() -> GestureDescription {
    GestureDescription::new("love_you")
        .add_curl(Thumb, NoCurl, 1.0)
        .add_direction(Thumb, HorizontalLeft, 1.0)
        .add_direction(Thumb, HorizontalRight, 1.0)
        .add_direction(Thumb, DiagonalUpLeft, 0.9)
        .add_direction(Thumb, DiagonalUpRight, 0.9)
        .add_curl_all(&[Index, Pinky], NoCurl, 1.0)
        .add_direction_all(&[Index, Pinky], VerticalUp, 1.0)
        .add_direction_all(&[Index, Pinky], DiagonalUpLeft, 0.8)
        .add_direction_all(&[Index, Pinky], DiagonalUpRight, 0.8)
        .add_curl_all(&[Middle, Ring], FullCurl, 1.0)
        .add_curl_all(&[Middle, Ring], HalfCurl, 0.8)
}

fn rock_on() -> GestureDescription {
    let desc = GestureDescription::new("rock_on")
        .add_curl(Thumb, HalfCurl, 1.0)
        .add_curl(Thumb, FullCurl, 1.0)
        .add_curl_all(&[Index, Pinky], NoCurl, 1.0)
        .add_direction_all(&[Index, Pinky], VerticalUp, 1.0)
        .add_direction_all(&[Index, Pinky], DiagonalUpLeft, 0.8)
        .add_direction_all(&[Index, Pinky], DiagonalUpRight, 0.8);
    curled(desc, &[Middle, Ring])
}

fn call_me() -> GestureDescription {
    let desc = GestureDescription::new("call_me")
        .add_curl(Thumb, NoCurl, 1.0)
        .add_direction(Thumb, VerticalUp, 0.8)
        .add_direction(Thumb, DiagonalUpLeft, 1.0)
        .add_direction(Thumb, DiagonalUpRight, 1.0)
        .add_curl(Pinky, NoCurl, 1.0)
        .add_direction(Pinky, HorizontalLeft, 1.0)
        .add_direction(Pinky, HorizontalRight, 1.0)
        .add_direction(Pinky, DiagonalDownLeft, 0.9)
        .add_direction(Pinky, DiagonalDownRight, 0.9);
    curled(desc, &[Index, Middle, Ring])
}

fn pointing(name: &str, primary: crate::types::DirectionCategory) -> GestureDescription {
    let desc = GestureDescription::new(name)
        .add_curl(Index, NoCurl, 1.0)
        .add_direction(Index, primary, 1.0)
        .add_curl(Thumb, HalfCurl, 1.0)
        .add_curl(Thumb, FullCurl, 0.9)
        .add_curl(Thumb, NoCurl, 0.6);
    curled(desc, LOWER_THREE)
}

fn point_up() -> GestureDescription {
    pointing("point_up", VerticalUp)
}

fn point_down() -> GestureDescription {
    pointing("point_down", VerticalDown)
}

fn point_left() -> GestureDescription {
    pointing("point_left", HorizontalLeft)
}

fn point_right() -> GestureDescription {
    pointing("point_right", HorizontalRight)
}

fn raised_fist() -> GestureDescription {
    curled(GestureDescription::new("raised_fist"), ALL)
}

fn hello() -> GestureDescription {
    GestureDescription::new("hello")
        .add_curl_all(ALL, NoCurl, 1.0)
        .add_direction_all(ALL, VerticalUp, 1.0)
}

fn thank_you() -> GestureDescription {
    GestureDescription::new("thank_you")
        .add_curl_all(ALL, NoCurl, 1.0)
        .add_direction_all(ALL, HorizontalLeft, 1.0)
        .add_direction_all(ALL, HorizontalRight, 1.0)
}
