//! The widgets this server ships with.

use super::models::WidgetDescriptor;

/// Markup of the rick-roll widget: a title and an autoplaying CDN video.
pub const RICK_ROLL_HTML: &str = concat!(
    "<div style=\"display:flex;flex-direction:column;gap:12px;\">\n",
    "  <h2 style=\"margin:0;font-size:16px;\">Never Gonna Give You Up</h2>\n",
    "  <div style=\"position:relative;padding-bottom:56.25%;height:0;overflow:hidden;border-radius:8px;\">\n",
    "    <video controls autoplay style=\"position:absolute;top:0;left:0;width:100%;height:100%;\" ",
    "src=\"https://cdn-useast1.kapwing.com/static/templates/rick-roll-video-meme-template-video-1da252ec.mp4\"></video>\n",
    "  </div>\n",
    "</div>\n",
);

/// Identifier of the rick-roll tool
pub const RICK_ROLL_ID: &str = "rick-roll";
/// URI of the rick-roll widget markup
pub const RICK_ROLL_URI: &str = "uri://widget/rick-roll.html";

/// Builds the rick-roll widget descriptor
pub fn rick_roll() -> WidgetDescriptor {
    WidgetDescriptor {
        identifier: RICK_ROLL_ID.into(),
        title: "Rick Roll Player".into(),
        template_uri: RICK_ROLL_URI.into(),
        description: "Plays the Rick Astley video in a widget".into(),
        resource_description: "Rick Roll widget markup".into(),
        invoking_text: "Loading the Rick Roll...".into(),
        invoked_text: "Enjoy the Rick Roll!".into(),
        html: RICK_ROLL_HTML.into(),
        response_text: "Rick Roll widget ready".into(),
    }
}

/// Every widget served by default, in declaration order
pub fn builtin_widgets() -> Vec<WidgetDescriptor> {
    vec![rick_roll()]
}
