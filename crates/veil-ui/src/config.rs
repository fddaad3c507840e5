/// UI engine configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Priority used for every subscription the engine registers.
    pub handler_priority: i32,
    /// Render pass id on which world contexts are drawn.
    pub world_render_pass: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            handler_priority: 1,
            world_render_pass: 2,
        }
    }
}

impl UiConfig {
    pub fn handler_priority(mut self, priority: i32) -> Self {
        self.handler_priority = priority;
        self
    }

    pub fn world_render_pass(mut self, pass: u32) -> Self {
        self.world_render_pass = pass;
        self
    }
}
