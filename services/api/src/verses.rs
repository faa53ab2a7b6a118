use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct Verse {
    pub(crate) reference: &'static str,
    pub(crate) text: &'static str,
}

pub(crate) const SCRIPTURE: [Verse; 5] = [
    Verse {
        reference: "Proverbs 3:5-6",
        text: "Trust in the LORD with all your heart and lean not on your own understanding; in all your ways submit to him, and he will make your paths straight.",
    },
    Verse {
        reference: "Luke 14:28",
        text: "Suppose one of you wants to build a tower. Won't you first sit down and estimate the cost to see if you have enough money to complete it?",
    },
    Verse {
        reference: "2 Corinthians 9:7",
        text: "Each of you should give what you have decided in your heart to give... for God loves a cheerful giver.",
    },
    Verse {
        reference: "Proverbs 21:20",
        text: "The wise store up choice food and olive oil, but fools gulp theirs down.",
    },
    Verse {
        reference: "Philippians 4:11-12",
        text: "I have learned to be content whatever the circumstances.",
    },
];

/// Wrapping index into [`SCRIPTURE`], owned by whichever surface shows verses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct VerseCycle {
    index: usize,
}

impl VerseCycle {
    pub(crate) fn at(index: usize) -> Self {
        Self {
            index: index % SCRIPTURE.len(),
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn current(&self) -> Verse {
        SCRIPTURE[self.index]
    }

    pub(crate) fn next(self) -> Self {
        Self::at(self.index + 1)
    }
}
