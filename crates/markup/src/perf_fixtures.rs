pub const BLOCK_TEMPLATE: &str =
    "<div id=card><h2>title</h2><p indent=2em>hello <blue>there</blue></p></div>";

pub fn make_blocks(blocks: usize) -> String {
    let mut markup = String::with_capacity(BLOCK_TEMPLATE.len() * blocks);
    for _ in 0..blocks {
        markup.push_str(BLOCK_TEMPLATE);
    }
    markup
}
