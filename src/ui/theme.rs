use ratatui::style::Color;

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub node_current: Color,    // Node being acted on in this step
    pub node_current_bg: Color, // Background behind the current node
    pub node_visited: Color,    // Nodes already output into the result
    pub node_on_stack: Color,   // Nodes sitting on the simulated stack
    pub edge: Color,            // Tree connector lines
    pub value: Color,           // Emitted result values
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    node_current: Color::Rgb(245, 194, 231),    // Pink
    node_current_bg: Color::Rgb(69, 71, 90),    // Lifted background
    node_visited: Color::Rgb(166, 227, 161),    // Green
    node_on_stack: Color::Rgb(250, 179, 135),   // Orange
    edge: Color::Rgb(108, 112, 134),            // Grey
    value: Color::Rgb(250, 179, 135),           // Orange
};
