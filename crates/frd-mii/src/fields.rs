//! Bit groups of the Mii record.
//!
//! Every group is one storage word with named sub-fields; see
//! [`frd_common::bitfield`] for the accessor conventions. Single-byte groups
//! have no byte order. Wider groups are stored big-endian.

use frd_common::{bit_group, BigEndian, U16, U32};

bit_group! {
    /// Sharing and regional options.
    pub struct MiiOptions(u8) {
        /// Copying allowed.
        allow_copying, set_allow_copying: 0, 1;
        /// Name hidden from other players.
        is_private_name, set_is_private_name: 1, 1;
        /// 0 = none, 1 = JPN, 2 = USA, 3 = EUR.
        region_lock, set_region_lock: 2, 2;
        /// 0 = JPN/USA/EUR, 1 = CHN, 2 = KOR, 3 = TWN.
        char_set, set_char_set: 4, 2;
    }
}

bit_group! {
    /// Location in the Mii Maker grid.
    pub struct MiiPosition(u8) {
        page_index, set_page_index: 0, 4;
        slot_index, set_slot_index: 4, 4;
    }
}

bit_group! {
    /// Console the Mii was created on.
    pub struct ConsoleIdentity(u8) {
        /// Always zero in observed data.
        unknown0, set_unknown0: 0, 4;
        /// 1 = Wii, 2 = DSi, 3 = 3DS.
        origin_console, set_origin_console: 4, 3;
    }
}

bit_group! {
    /// Sex, birthday, shirt color and favorite flag.
    pub struct MiiDetails(U16<BigEndian>) {
        /// 0 = male, 1 = female.
        sex, set_sex: 0, 1;
        bday_month, set_bday_month: 1, 4;
        bday_day, set_bday_day: 5, 5;
        shirt_color, set_shirt_color: 10, 4;
        favorite, set_favorite: 14, 1;
    }
}

bit_group! {
    pub struct FaceStyle(u8) {
        disable_sharing, set_disable_sharing: 0, 1;
        shape, set_shape: 1, 4;
        skin_color, set_skin_color: 5, 3;
    }
}

bit_group! {
    pub struct FaceDetails(u8) {
        wrinkles, set_wrinkles: 0, 4;
        makeup, set_makeup: 4, 4;
    }
}

bit_group! {
    pub struct HairDetails(u8) {
        color, set_color: 0, 3;
        flip, set_flip: 3, 1;
    }
}

bit_group! {
    pub struct EyeDetails(U32<BigEndian>) {
        style, set_style: 0, 6;
        color, set_color: 6, 3;
        scale, set_scale: 9, 4;
        yscale, set_yscale: 13, 3;
        rotation, set_rotation: 16, 5;
        xspacing, set_xspacing: 21, 4;
        yposition, set_yposition: 25, 5;
    }
}

bit_group! {
    pub struct EyebrowDetails(U32<BigEndian>) {
        style, set_style: 0, 5;
        color, set_color: 5, 3;
        scale, set_scale: 8, 4;
        yscale, set_yscale: 12, 3;
        pad, set_pad: 15, 1;
        rotation, set_rotation: 16, 5;
        xspacing, set_xspacing: 21, 4;
        yposition, set_yposition: 25, 5;
    }
}

bit_group! {
    pub struct NoseDetails(U16<BigEndian>) {
        style, set_style: 0, 5;
        scale, set_scale: 5, 4;
        yposition, set_yposition: 9, 5;
    }
}

bit_group! {
    pub struct MouthDetails(U16<BigEndian>) {
        style, set_style: 0, 6;
        color, set_color: 6, 3;
        scale, set_scale: 9, 4;
        yscale, set_yscale: 13, 3;
    }
}

bit_group! {
    /// Mustache style, plus the mouth's vertical position.
    pub struct MustacheDetails(U16<BigEndian>) {
        mouth_yposition, set_mouth_yposition: 0, 5;
        mustache_style, set_mustache_style: 5, 3;
        pad, set_pad: 8, 2;
    }
}

bit_group! {
    pub struct BeardDetails(U16<BigEndian>) {
        style, set_style: 0, 3;
        color, set_color: 3, 3;
        scale, set_scale: 6, 4;
        ypos, set_ypos: 10, 5;
    }
}

bit_group! {
    pub struct GlassesDetails(U16<BigEndian>) {
        style, set_style: 0, 4;
        color, set_color: 4, 3;
        scale, set_scale: 7, 4;
        ypos, set_ypos: 11, 5;
    }
}

bit_group! {
    pub struct MoleDetails(U16<BigEndian>) {
        enable, set_enable: 0, 1;
        scale, set_scale: 1, 5;
        xpos, set_xpos: 6, 5;
        ypos, set_ypos: 11, 5;
    }
}
