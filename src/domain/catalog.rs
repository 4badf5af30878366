//! Static option catalog for every cinematic parameter.
//!
//! The first option of each set is the default used for a fresh prompt state.

use serde::Serialize;

use crate::domain::Parameter;

/// One selectable value for a cinematic parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CinematicOption {
    /// Canonical token written into the prompt state.
    pub value: &'static str,
    /// Short display name.
    pub label: &'static str,
    /// Tooltip prose.
    pub description: &'static str,
}

const fn opt(
    value: &'static str,
    label: &'static str,
    description: &'static str,
) -> CinematicOption {
    CinematicOption { value, label, description }
}

pub static SHOT_TYPE_OPTIONS: [CinematicOption; 6] = [
    opt(
        "establishing shot",
        "Establishing Shot",
        "A wide shot that sets the scene and establishes the context and location.",
    ),
    opt(
        "character introduction",
        "Character Introduction",
        "A shot that introduces a character, often highlighting their personality or key attributes.",
    ),
    opt(
        "dramatic reveal",
        "Dramatic Reveal",
        "A shot that uncovers a crucial piece of information, character, or plot point.",
    ),
    opt(
        "action sequence",
        "Action Sequence",
        "A shot designed to capture dynamic movement, combat, or high-energy events.",
    ),
    opt(
        "point of view shot (POV)",
        "Point of View (POV)",
        "The camera shows what the character is looking at, immersing the viewer in their perspective.",
    ),
    opt(
        "close-up on detail",
        "Close-up on Detail",
        "A tight shot that focuses on a small object or detail for symbolic or narrative importance.",
    ),
];

pub static COMPOSITION_OPTIONS: [CinematicOption; 5] = [
    opt(
        "rule of thirds",
        "Rule of Thirds",
        "The subject is placed at the intersection of imaginary gridlines for a balanced and natural look.",
    ),
    opt(
        "centered composition",
        "Centered",
        "The subject is placed directly in the center of the frame to draw immediate attention.",
    ),
    opt(
        "leading lines",
        "Leading Lines",
        "Uses natural lines in the environment to guide the viewer's eye to the subject.",
    ),
    opt(
        "negative space",
        "Negative Space",
        "Emphasizes an empty or uncluttered area around the subject to create a sense of scale or isolation.",
    ),
    opt(
        "symmetrical framing",
        "Symmetrical",
        "The frame is balanced with mirrored elements on either side, creating a sense of order and harmony.",
    ),
];

pub static ART_STYLE_OPTIONS: [CinematicOption; 6] = [
    opt(
        "Photorealistic CGI",
        "Photorealistic CGI",
        "Aims for maximum realism, mimicking a live-action film with advanced rendering techniques like ray tracing.",
    ),
    opt(
        "Classic 2D Cel Animation",
        "2D Cel Animation",
        "Emulates traditional hand-drawn animation with bold outlines and flat colors.",
    ),
    opt(
        "Stop-Motion Animation",
        "Stop-Motion",
        "Creates a tangible, handcrafted look by simulating the frame-by-frame manipulation of physical objects.",
    ),
    opt(
        "Impressionistic Digital Painting",
        "Digital Painting",
        "Features visible brushstrokes and a focus on light and color to create an expressive, artistic mood.",
    ),
    opt(
        "Cyberpunk Glitch Art",
        "Glitch Art",
        "Uses digital artifacts, scan lines, and saturated neon colors for a futuristic, dystopian feel.",
    ),
    opt(
        "Technical Blueprint Style",
        "Blueprint Style",
        "A clean, schematic style with monochrome lines and precise details, resembling architectural or engineering drawings.",
    ),
];

pub static CAMERA_ANGLE_OPTIONS: [CinematicOption; 5] = [
    opt(
        "low-angle shot",
        "Low-Angle",
        "Shooting from below the subject to make them appear powerful and imposing.",
    ),
    opt(
        "high-angle shot",
        "High-Angle",
        "Shooting from above the subject to make them appear small or vulnerable.",
    ),
    opt(
        "eye-level shot",
        "Eye-Level",
        "A neutral shot that mimics natural human vision, fostering a sense of connection.",
    ),
    opt(
        "dutch angle",
        "Dutch Angle",
        "The camera is tilted to create a sense of unease, tension, or disorientation.",
    ),
    opt(
        "bird's eye view",
        "Bird's-Eye View",
        "An overhead shot that provides an omniscient perspective of the scene.",
    ),
];

pub static CAMERA_LENS_OPTIONS: [CinematicOption; 5] = [
    opt(
        "shallow depth of field",
        "Shallow DoF",
        "Blurs the background to isolate the subject, often creating a beautiful bokeh effect.",
    ),
    opt(
        "deep depth of field",
        "Deep DoF",
        "Keeps both the foreground and background in sharp focus, showing the subject within its environment.",
    ),
    opt(
        "wide-angle lens look",
        "Wide-Angle",
        "Exaggerates depth and scale, making the environment feel vast and immersive.",
    ),
    opt(
        "85mm portrait look",
        "85mm Portrait",
        "Flattens the perspective and provides a classic, flattering look for characters.",
    ),
    opt(
        "anamorphic lens flare",
        "Anamorphic Flare",
        "Adds horizontal, streaking lens flares for a classic, cinematic aesthetic.",
    ),
];

pub static CAMERA_MOVEMENT_OPTIONS: [CinematicOption; 5] = [
    opt(
        "static shot",
        "Static",
        "The camera is stationary, providing a stable and observational view.",
    ),
    opt(
        "slow push-in",
        "Slow Push-In",
        "The camera moves slowly toward the subject to build tension or focus on emotion.",
    ),
    opt(
        "dolly zoom",
        "Dolly Zoom",
        "The camera moves while the lens zooms, creating a disorienting effect.",
    ),
    opt(
        "tracking shot",
        "Tracking Shot",
        "The camera moves alongside the subject, keeping them in the frame.",
    ),
    opt(
        "crane shot",
        "Crane Shot",
        "The camera moves vertically on a crane to reveal the scale of the scene.",
    ),
];

pub static LIGHTING_STYLE_OPTIONS: [CinematicOption; 6] = [
    opt(
        "three-point lighting",
        "Three-Point",
        "A standard professional setup (key, fill, back light) for a well-lit, dimensional subject.",
    ),
    opt(
        "chiaroscuro lighting",
        "Chiaroscuro",
        "Uses high-contrast light and shadow to create a dramatic, mysterious mood.",
    ),
    opt(
        "Rembrandt lighting",
        "Rembrandt",
        "A classic portrait style characterized by a triangle of light on the shadowed cheek.",
    ),
    opt(
        "backlight",
        "Backlight",
        "The main light source is behind the subject, creating a silhouette or a bright rim of light.",
    ),
    opt(
        "volumetric lighting",
        "Volumetric",
        "Makes light beams visible as they travel through the atmosphere (e.g., fog, dust).",
    ),
    opt(
        "neon lighting",
        "Neon",
        "Uses bright, colorful neon signs or tubes as the primary light source for a futuristic or urban vibe.",
    ),
];

pub static TIME_OF_DAY_OPTIONS: [CinematicOption; 5] = [
    opt(
        "mid-day",
        "Mid-Day",
        "Bright, direct overhead sun that creates harsh shadows and high contrast.",
    ),
    opt(
        "golden hour",
        "Golden Hour",
        "The period shortly after sunrise or before sunset, known for its warm, soft, and flattering light.",
    ),
    opt(
        "blue hour",
        "Blue Hour",
        "The period just before sunrise or after sunset, when the light is cool, diffused, and serene.",
    ),
    opt(
        "night",
        "Night",
        "The scene is dark, relying on moonlight, starlight, or artificial light sources.",
    ),
    opt(
        "dawn",
        "Dawn",
        "The very beginning of the day, with cool, gentle light and a sense of quiet anticipation.",
    ),
];

pub static WEATHER_OPTIONS: [CinematicOption; 6] = [
    opt(
        "clear sky",
        "Clear Sky",
        "A bright, sunny day with no clouds, suggesting openness and clarity.",
    ),
    opt(
        "overcast",
        "Overcast",
        "The sky is covered with clouds, creating soft, diffused light and a pensive or somber mood.",
    ),
    opt(
        "light rain",
        "Light Rain",
        "Gentle rainfall that can create a melancholic, romantic, or cleansing atmosphere. Surfaces become reflective.",
    ),
    opt(
        "heavy thunderstorm",
        "Thunderstorm",
        "A dramatic storm with heavy rain, lightning, and thunder, creating tension and chaos.",
    ),
    opt(
        "dense fog",
        "Dense Fog",
        "Thick fog that obscures visibility, evoking mystery, confusion, or isolation.",
    ),
    opt(
        "blowing snow",
        "Blowing Snow",
        "Dynamic, windy conditions with snow, suggesting a harsh, cold, and challenging environment.",
    ),
];

pub static COLOR_GRADE_OPTIONS: [CinematicOption; 5] = [
    opt(
        "Kodachrome-esque colors",
        "Kodachrome",
        "Richly saturated with a nostalgic, timeless feel reminiscent of classic film stock.",
    ),
    opt(
        "teal and orange color grade",
        "Teal & Orange",
        "A modern, popular cinematic look that creates a strong complementary color contrast.",
    ),
    opt(
        "bleach-bypass look",
        "Bleach Bypass",
        "A gritty, high-contrast look with desaturated colors and deep blacks.",
    ),
    opt("monochrome", "Monochrome", "Rendered in black and white to emphasize texture, form, and emotion."),
    opt("desaturated pastel colors", "Pastel", "A soft, dreamlike palette with muted, gentle colors."),
];

pub static RENDER_STYLE_OPTIONS: [CinematicOption; 5] = [
    opt(
        "hyperrealistic",
        "Hyperrealistic",
        "Aims for photorealism with meticulous detail in textures, materials, and lighting.",
    ),
    opt(
        "stylized",
        "Stylized",
        "Intentionally non-realistic, using exaggerated forms, colors, and proportions for artistic effect.",
    ),
    opt(
        "painterly",
        "Painterly",
        "Mimics the look of a traditional painting, with visible brushstrokes and rich textures.",
    ),
    opt(
        "cel-shaded",
        "Cel-Shaded",
        "Creates a graphic, comic book-like appearance with flat colors and bold outlines.",
    ),
    opt(
        "VFX composite",
        "VFX Composite",
        "Designed to be seamlessly integrated with live-action footage or other rendered elements.",
    ),
];

pub static FILM_STOCK_OPTIONS: [CinematicOption; 5] = [
    opt(
        "Modern Digital",
        "Modern Digital",
        "Crisp, clean, and vibrant look of modern high-end digital cinema cameras.",
    ),
    opt(
        "Kodak Vision3",
        "Kodak Vision3",
        "Classic cinematic film look with rich colors, pleasant grain, and high dynamic range.",
    ),
    opt(
        "Fuji Eterna",
        "Fuji Eterna",
        "A more muted, cinematic look with soft contrast and desaturated tones, popular for dramas.",
    ),
    opt(
        "16mm Film Grain",
        "16mm Film Grain",
        "A raw, gritty look with noticeable film grain, often used for documentaries or indie films.",
    ),
    opt(
        "Technicolor",
        "Technicolor",
        "Extremely vibrant, saturated colors reminiscent of classic Hollywood epics.",
    ),
];

pub static POST_PROCESSING_EFFECTS_OPTIONS: [CinematicOption; 5] = [
    opt("none", "None", "A clean image with no additional post-processing effects."),
    opt(
        "Lens Dust & Scratches",
        "Lens Dust",
        "Adds subtle imperfections to the virtual lens for a more organic, realistic feel.",
    ),
    opt(
        "Bloom & Glow",
        "Bloom & Glow",
        "Bright areas of the image bleed softly, creating a dreamy or ethereal atmosphere.",
    ),
    opt(
        "Chromatic Aberration",
        "Chromatic Aberration",
        "Adds subtle color fringing on high-contrast edges, mimicking real-world lens imperfections.",
    ),
    opt(
        "Vignette",
        "Vignette",
        "Darkens the corners of the frame to draw the viewer's eye to the center of the image.",
    ),
];

pub static ASPECT_RATIO_OPTIONS: [CinematicOption; 5] = [
    opt("1:1", "Square (1:1)", "A square aspect ratio, common for social media posts."),
    opt("16:9", "Widescreen (16:9)", "Standard widescreen format for video and modern displays."),
    opt("9:16", "Vertical (9:16)", "Vertical format, ideal for mobile viewing and stories."),
    opt("4:3", "Standard (4:3)", "Classic television and monitor aspect ratio."),
    opt("3:2", "Photo (3:2)", "Standard aspect ratio for 35mm film and digital photography."),
];

/// Ordered option set for a parameter.
pub fn options(parameter: Parameter) -> &'static [CinematicOption] {
    match parameter {
        Parameter::ShotType => &SHOT_TYPE_OPTIONS,
        Parameter::ArtStyle => &ART_STYLE_OPTIONS,
        Parameter::Composition => &COMPOSITION_OPTIONS,
        Parameter::CameraAngle => &CAMERA_ANGLE_OPTIONS,
        Parameter::CameraLens => &CAMERA_LENS_OPTIONS,
        Parameter::CameraMovement => &CAMERA_MOVEMENT_OPTIONS,
        Parameter::LightingStyle => &LIGHTING_STYLE_OPTIONS,
        Parameter::TimeOfDay => &TIME_OF_DAY_OPTIONS,
        Parameter::Weather => &WEATHER_OPTIONS,
        Parameter::ColorGrade => &COLOR_GRADE_OPTIONS,
        Parameter::RenderStyle => &RENDER_STYLE_OPTIONS,
        Parameter::FilmStock => &FILM_STOCK_OPTIONS,
        Parameter::PostProcessingEffects => &POST_PROCESSING_EFFECTS_OPTIONS,
    }
}

/// Look up a catalog entry by its canonical value.
pub fn find(parameter: Parameter, value: &str) -> Option<&'static CinematicOption> {
    options(parameter).iter().find(|option| option.value == value)
}

/// Default value for a fresh prompt state.
pub fn default_value(parameter: Parameter) -> &'static str {
    options(parameter)[0].value
}

/// Whether the value is one of the supported aspect ratios.
pub fn is_aspect_ratio(value: &str) -> bool {
    ASPECT_RATIO_OPTIONS.iter().any(|option| option.value == value)
}
