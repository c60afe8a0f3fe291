//! The fixed 16-colour palette every pixel is drawn from.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Palette {
    #[default]
    Black = 0,
    Navy = 1,
    Purple = 2,
    Green = 3,
    Brown = 4,
    DarkBlue = 5,
    LightBlue = 6,
    White = 7,
    Red = 8,
    Orange = 9,
    Yellow = 10,
    Lime = 11,
    Cyan = 12,
    Gray = 13,
    Pink = 14,
    Peach = 15,
}

impl Palette {
    pub const ALL: [Palette; 16] = [
        Palette::Black,
        Palette::Navy,
        Palette::Purple,
        Palette::Green,
        Palette::Brown,
        Palette::DarkBlue,
        Palette::LightBlue,
        Palette::White,
        Palette::Red,
        Palette::Orange,
        Palette::Yellow,
        Palette::Lime,
        Palette::Cyan,
        Palette::Gray,
        Palette::Pink,
        Palette::Peach,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Opaque RGBA8.
    pub fn rgba(self) -> [u8; 4] {
        let hex: u32 = match self {
            Palette::Black => 0x000000,
            Palette::Navy => 0x2b335f,
            Palette::Purple => 0x7e2072,
            Palette::Green => 0x19959c,
            Palette::Brown => 0x8b4852,
            Palette::DarkBlue => 0x395c98,
            Palette::LightBlue => 0xa9c1ff,
            Palette::White => 0xeeeeee,
            Palette::Red => 0xd4186c,
            Palette::Orange => 0xd38441,
            Palette::Yellow => 0xe9c35b,
            Palette::Lime => 0x70c6a9,
            Palette::Cyan => 0x7696de,
            Palette::Gray => 0xa3a3a3,
            Palette::Pink => 0xff9798,
            Palette::Peach => 0xedc7b0,
        };
        [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255]
    }
}
