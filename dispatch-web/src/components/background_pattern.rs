use yew::{Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct BackgroundPatternProps {
    /// Draws the glyphs in white for dark sections.
    #[prop_or_default]
    pub light: bool,
}

/// A faint stationery glyph: placement, tilt and box size.
struct Glyph {
    icon: IconId,
    position: &'static str,
    tilt: &'static str,
    size: &'static str,
}

const fn glyph(
    icon: IconId,
    position: &'static str,
    tilt: &'static str,
    size: &'static str,
) -> Glyph {
    Glyph {
        icon,
        position,
        tilt,
        size,
    }
}

const SMALL: &str = "w-6 h-6 md:w-8 md:h-8";
const MEDIUM: &str = "w-8 h-8 md:w-10 md:h-10";
const LARGE: &str = "w-8 h-8 md:w-12 md:h-12";
const HUGE: &str = "w-10 h-10 md:w-14 md:h-14";
const TINY: &str = "w-5 h-5 md:w-7 md:h-7";

const BOOK: IconId = IconId::HeroiconsOutlineBookOpen;
const CAP: IconId = IconId::HeroiconsOutlineAcademicCap;
const PENCIL: IconId = IconId::HeroiconsOutlinePencil;
const RULER: IconId = IconId::HeroiconsOutlinePencilSquare;
const BAG: IconId = IconId::HeroiconsOutlineBriefcase;
const CALCULATOR: IconId = IconId::HeroiconsOutlineCalculator;
const LIBRARY: IconId = IconId::HeroiconsOutlineBuildingLibrary;
const SCROLL: IconId = IconId::HeroiconsOutlineDocumentText;

const GLYPHS: [Glyph; 22] = [
    glyph(BOOK, "top-[5%] left-[2%]", "rotate-[-15deg]", MEDIUM),
    glyph(PENCIL, "top-[8%] left-[12%]", "rotate-[10deg]", SMALL),
    glyph(RULER, "top-[15%] left-[5%]", "rotate-[-5deg]", LARGE),
    glyph(CAP, "top-[5%] right-[5%]", "rotate-[12deg]", HUGE),
    glyph(CALCULATOR, "top-[12%] right-[15%]", "rotate-[-8deg]", SMALL),
    glyph(SCROLL, "top-[18%] right-[2%]", "rotate-[20deg]", MEDIUM),
    glyph(BAG, "top-[40%] left-[3%]", "rotate-[45deg]", LARGE),
    glyph(LIBRARY, "top-[45%] left-[10%]", "rotate-[-10deg]", HUGE),
    glyph(BOOK, "top-[35%] right-[8%]", "rotate-[-15deg]", MEDIUM),
    glyph(PENCIL, "top-[50%] right-[3%]", "rotate-[5deg]", SMALL),
    glyph(CAP, "bottom-[10%] left-[4%]", "rotate-[25deg]", LARGE),
    glyph(CALCULATOR, "bottom-[20%] left-[12%]", "rotate-[-20deg]", SMALL),
    glyph(RULER, "bottom-[5%] left-[18%]", "rotate-[10deg]", SMALL),
    glyph(BAG, "bottom-[15%] right-[5%]", "rotate-[-15deg]", LARGE),
    glyph(SCROLL, "bottom-[8%] right-[15%]", "rotate-[30deg]", SMALL),
    glyph(LIBRARY, "bottom-[25%] right-[10%]", "rotate-[-5deg]", SMALL),
    glyph(PENCIL, "top-[60%] left-[50%]", "rotate-[90deg]", SMALL),
    glyph(RULER, "top-[25%] left-[40%]", "rotate-[-45deg]", SMALL),
    glyph(BOOK, "top-[32%] left-[22%]", "rotate-[60deg]", TINY),
    glyph(PENCIL, "bottom-[35%] right-[28%]", "rotate-[-15deg]", TINY),
    glyph(SCROLL, "top-[10%] left-[50%]", "rotate-[30deg]", TINY),
    glyph(CALCULATOR, "top-[65%] right-[45%]", "rotate-[15deg]", TINY),
];

fn tone(light: bool) -> &'static str {
    if light { "text-white" } else { "text-black" }
}

/// Scattered, nearly transparent campus icons behind a section's content.
///
/// The parent must be `relative`; the pattern ignores pointer events.
#[function_component(BackgroundPattern)]
pub fn background_pattern(props: &BackgroundPatternProps) -> Html {
    html! {
        <div
            class={classes!("absolute", "inset-0", "overflow-hidden", "pointer-events-none", "select-none", "z-0", tone(props.light))}
            aria-hidden="true"
        >
            { for GLYPHS.into_iter().map(|glyph| html! {
                <div class={classes!("absolute", "opacity-[0.03]", glyph.position, glyph.tilt, glyph.size)}>
                    <Icon icon_id={glyph.icon} class="w-full h-full" />
                </div>
            }) }
        </div>
    }
}
