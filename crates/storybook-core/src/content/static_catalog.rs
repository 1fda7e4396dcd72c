use super::{Page, Story, StoryCatalog};

const ELI_PAGES: [Page<'static>; 5] = [
    Page {
        text: "Eli the little elephant loved peanuts, but today he promised his mama he wouldn't \
eat any before dinner.",
        image: "page1.jpg",
    },
    Page {
        text: "When Mama asked if he ate the peanuts, Eli shook his head and said, 'No, a \
mischievous monkey must have taken them!'",
        image: "page2.jpg",
    },
    Page {
        text: "Later, his tummy started to rumble and grumble really loud because he had eaten \
too many peanuts.",
        image: "page3.jpg",
    },
    Page {
        text: "Eli couldn't handle the tummy ache any longer, so he found his mama and told her \
the truth about eating the peanuts.",
        image: "page4.jpg",
    },
    Page {
        text: "Mama hugged Eli and gave him some special leaves for his tummy, telling him that \
telling the truth always makes everything better.",
        image: "page5.jpg",
    },
];

/// Built-in story shipped with the reader.
pub const ELI_THE_ELEPHANT: Story<'static> = Story {
    id: "eli-the-elephant",
    title: "Eli the Honest Elephant",
    cover: "coverpage.jpg",
    theme: "Honesty",
    moral: "Honesty is always the best policy; telling the truth frees you from guilt and builds \
trust with those you love.",
    pages: &ELI_PAGES,
};

pub const BUILTIN_STORIES: [Story<'static>; 1] = [ELI_THE_ELEPHANT];

pub fn builtin_catalog() -> StaticCatalog<'static> {
    StaticCatalog::new(&BUILTIN_STORIES)
}

/// Catalog over a borrowed story table.
#[derive(Clone, Copy, Debug)]
pub struct StaticCatalog<'a> {
    stories: &'a [Story<'a>],
}

impl<'a> StaticCatalog<'a> {
    pub const fn new(stories: &'a [Story<'a>]) -> Self {
        Self { stories }
    }
}

impl StoryCatalog for StaticCatalog<'_> {
    fn story_count(&self) -> u16 {
        self.stories.len().min(u16::MAX as usize) as u16
    }

    fn story_at(&self, index: u16) -> Option<Story<'_>> {
        self.stories.get(index as usize).copied()
    }
}
