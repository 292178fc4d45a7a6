pub struct ArticleData {
    pub title: &'static str,
    pub topic: &'static str,
    pub author: &'static str,
    pub body: &'static str,
    pub created_at: i64,
    pub votes: i32,
}

pub struct CommentData {
    pub body: &'static str,
    pub votes: i32,
    pub author: &'static str,
    pub article_id: i32,
    pub created_at: i64,
}

// (slug, description)
pub static TOPICS: &[(&str, &str)] = &[
    ("mitch", "The man, the Mitch, the legend"),
    ("cats", "Not dogs"),
    ("paper", "what books are made of"),
];

// (username, name, avatar_url)
pub static USERS: &[(&str, &str, &str)] = &[
    (
        "butter_bridge",
        "jonny",
        "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
    ),
    (
        "icellusedkars",
        "sam",
        "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
    ),
    (
        "rogersop",
        "paul",
        "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
    ),
    (
        "lurker",
        "do_nothing",
        "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
    ),
];

pub static ARTICLES: &[ArticleData] = &[
    ArticleData {
        title: "Living in the shadow of a great man",
        topic: "mitch",
        author: "butter_bridge",
        body: "I find this existence challenging",
        created_at: 1594329060000,
        votes: 100,
    },
    ArticleData {
        title: "Sony Vaio; or, The Laptop",
        topic: "mitch",
        author: "icellusedkars",
        body: "Call me Mitchell. Some years ago never mind how long precisely having little or no money in my purse, and nothing particular to interest me on shore, I thought I would buy a laptop about a little and see the codeless part of the world.",
        created_at: 1602828180000,
        votes: 0,
    },
    ArticleData {
        title: "Eight pug gifs that remind me of mitch",
        topic: "mitch",
        author: "icellusedkars",
        body: "some gifs",
        created_at: 1604394720000,
        votes: 0,
    },
    ArticleData {
        title: "Student SUES Mitch!",
        topic: "mitch",
        author: "rogersop",
        body: "We all love Mitch and his wonderful, unique typing style. However, the volume of his typing has ALLEGEDLY burst another students eardrums, and they are now suing for damages",
        created_at: 1588731240000,
        votes: 0,
    },
    ArticleData {
        title: "UNCOVERED: catspiracy to bring down democracy",
        topic: "cats",
        author: "rogersop",
        body: "Bastet walks amongst us, and the cats are taking arms!",
        created_at: 1596464040000,
        votes: 0,
    },
    ArticleData {
        title: "A",
        topic: "mitch",
        author: "icellusedkars",
        body: "Delicious tin of cat food",
        created_at: 1602986400000,
        votes: 0,
    },
    ArticleData {
        title: "Z",
        topic: "mitch",
        author: "icellusedkars",
        body: "I was hungry.",
        created_at: 1578406080000,
        votes: 0,
    },
    ArticleData {
        title: "Does Mitch predate civilisation?",
        topic: "mitch",
        author: "icellusedkars",
        body: "Archaeologists have uncovered a gigantic statue from the dawn of humanity, and it has an uncanny resemblance to Mitch. Surely I am not the only person who can see this?!",
        created_at: 1587089280000,
        votes: 0,
    },
    ArticleData {
        title: "They're not exactly dogs, are they?",
        topic: "mitch",
        author: "butter_bridge",
        body: "Well? Think about it.",
        created_at: 1591438200000,
        votes: 0,
    },
    ArticleData {
        title: "Seven inspirational thought leaders from Manchester UK",
        topic: "mitch",
        author: "rogersop",
        body: "Who are we kidding, there is only one, and it's Mitch!",
        created_at: 1589433300000,
        votes: 0,
    },
    ArticleData {
        title: "Am I a cat?",
        topic: "mitch",
        author: "icellusedkars",
        body: "Having run out of options, Am I a cat?",
        created_at: 1579126860000,
        votes: 0,
    },
    ArticleData {
        title: "Moustache",
        topic: "mitch",
        author: "butter_bridge",
        body: "Have you seen the size of that thing?",
        created_at: 1602419040000,
        votes: 0,
    },
];

pub static COMMENTS: &[CommentData] = &[
    CommentData {
        body: "Oh, I've got compassion running out of my nose, pal! I'm the Sultan of Sentiment!",
        votes: 16,
        author: "butter_bridge",
        article_id: 9,
        created_at: 1586179020000,
    },
    CommentData {
        body: "The beautiful thing about treasure is that it exists. Got to find out what kind of sheets these are; not cotton, not rayon, silky.",
        votes: 14,
        author: "butter_bridge",
        article_id: 1,
        created_at: 1604113380000,
    },
    CommentData {
        body: "Replacing the quiet elegance of the dark suit and tie with the casual indifference of these muted earth tones is a form of fashion suicide, but, uh, call me crazy, on you it works.",
        votes: 100,
        author: "icellusedkars",
        article_id: 1,
        created_at: 1583025180000,
    },
    CommentData {
        body: " I carry a log, yes. Is it funny to you? It is not to me.",
        votes: -100,
        author: "icellusedkars",
        article_id: 1,
        created_at: 1582459260000,
    },
    CommentData {
        body: "I hate streaming noses",
        votes: 0,
        author: "icellusedkars",
        article_id: 1,
        created_at: 1604437200000,
    },
    CommentData {
        body: "I hate streaming eyes even more",
        votes: 0,
        author: "icellusedkars",
        article_id: 1,
        created_at: 1586642520000,
    },
    CommentData {
        body: "Lobster pot",
        votes: 0,
        author: "icellusedkars",
        article_id: 1,
        created_at: 1589577540000,
    },
    CommentData {
        body: "Delicious crackerbreads",
        votes: 0,
        author: "icellusedkars",
        article_id: 1,
        created_at: 1586899140000,
    },
    CommentData {
        body: "Superficially charming",
        votes: 0,
        author: "icellusedkars",
        article_id: 1,
        created_at: 1577848080000,
    },
    CommentData {
        body: "git push origin master",
        votes: 0,
        author: "icellusedkars",
        article_id: 3,
        created_at: 1592641440000,
    },
    CommentData {
        body: "Ambidextrous marsupial",
        votes: 0,
        author: "icellusedkars",
        article_id: 3,
        created_at: 1600560600000,
    },
    CommentData {
        body: "Massive intercranial brain haemorrhage",
        votes: 0,
        author: "icellusedkars",
        article_id: 1,
        created_at: 1584205320000,
    },
    CommentData {
        body: "Fruit pastilles",
        votes: 0,
        author: "icellusedkars",
        article_id: 1,
        created_at: 1592220300000,
    },
    CommentData {
        body: "What do you see? I have no idea where this will lead us. This place I speak of, is known as the Black Lodge.",
        votes: 16,
        author: "icellusedkars",
        article_id: 5,
        created_at: 1591682400000,
    },
    CommentData {
        body: "I am 100% sure that we're not completely sure.",
        votes: 1,
        author: "butter_bridge",
        article_id: 5,
        created_at: 1606176480000,
    },
    CommentData {
        body: "This is a bad article name",
        votes: 1,
        author: "butter_bridge",
        article_id: 6,
        created_at: 1602433380000,
    },
    CommentData {
        body: "The owls are not what they seem.",
        votes: 20,
        author: "icellusedkars",
        article_id: 9,
        created_at: 1584205320000,
    },
    CommentData {
        body: "This morning, I showered for nine minutes.",
        votes: 16,
        author: "butter_bridge",
        article_id: 1,
        created_at: 1595294400000,
    },
];
