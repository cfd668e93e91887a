//! Bundled sample datasets shown when the backend is unconfigured or unreachable.

use crate::types::{
    Analytics, Article, DistributionSlice, Education, EngagementPoint, Experience, Post,
    PostPerformance, Profile, Website,
};
use chrono::{DateTime, TimeZone, Utc};

fn at(month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            text: "Excited to share that our team has successfully launched a new feature that will revolutionize how users interact with our platform! 🚀 #Innovation #Tech".to_string(),
            created: at(3, 15, 10, 30),
            likes: 245,
            comments: 56,
            shares: 23,
            url: Some("https://linkedin.com/post/1".to_string()),
        },
        Post {
            id: "2".to_string(),
            text: "Just finished an amazing workshop on cloud architecture. The future of scalable applications is here! 💡 #CloudComputing #Architecture".to_string(),
            created: at(3, 14, 15, 45),
            likes: 189,
            comments: 34,
            shares: 12,
            url: Some("https://linkedin.com/post/2".to_string()),
        },
        Post {
            id: "3".to_string(),
            text: "Looking for talented developers to join our growing team! We're building something special. Check out our open positions. #Hiring #TechJobs".to_string(),
            created: at(3, 13, 9, 15),
            likes: 312,
            comments: 78,
            shares: 45,
            url: Some("https://linkedin.com/post/3".to_string()),
        },
    ]
}

pub fn articles() -> Vec<Article> {
    vec![
        Article {
            id: "1".to_string(),
            title: "The Future of Cloud Computing: Trends to Watch in 2024".to_string(),
            text: "Cloud computing continues to evolve at a rapid pace. In this article, we explore the emerging trends that will shape the industry in 2024 and beyond...".to_string(),
            created: at(3, 15, 10, 30),
            likes: 456,
            comments: 89,
            shares: 67,
            url: Some("https://linkedin.com/article/1".to_string()),
        },
        Article {
            id: "2".to_string(),
            title: "Building Scalable Applications with Microservices".to_string(),
            text: "Microservices architecture has become the go-to solution for building scalable applications. Learn about the best practices and common pitfalls...".to_string(),
            created: at(3, 14, 15, 45),
            likes: 378,
            comments: 45,
            shares: 34,
            url: Some("https://linkedin.com/article/2".to_string()),
        },
        Article {
            id: "3".to_string(),
            title: "The Impact of AI on Software Development".to_string(),
            text: "Artificial Intelligence is transforming how we write and maintain code. Discover how AI tools are changing the landscape of software development...".to_string(),
            created: at(3, 13, 9, 15),
            likes: 523,
            comments: 112,
            shares: 78,
            url: Some("https://linkedin.com/article/3".to_string()),
        },
    ]
}

pub fn profile() -> Profile {
    Profile {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        headline: "Senior Software Engineer".to_string(),
        location: "San Francisco, CA".to_string(),
        email: "john.doe@example.com".to_string(),
        profile_picture: None,
        about: "Experienced software engineer with a passion for building scalable applications and mentoring junior developers.".to_string(),
        experience: vec![
            Experience {
                title: "Senior Software Engineer".to_string(),
                company: "Tech Corp".to_string(),
                start_date: "2020".to_string(),
                end_date: None,
                description: "Leading development of cloud-native applications.".to_string(),
            },
            Experience {
                title: "Software Engineer".to_string(),
                company: "StartUp Inc".to_string(),
                start_date: "2018".to_string(),
                end_date: Some("2020".to_string()),
                description: "Developed and maintained web applications.".to_string(),
            },
        ],
        education: vec![
            Education {
                school: "University of Technology".to_string(),
                degree: "Master of Computer Science".to_string(),
                start_date: "2016".to_string(),
                end_date: Some("2018".to_string()),
            },
            Education {
                school: "State University".to_string(),
                degree: "Bachelor of Science in Computer Science".to_string(),
                start_date: "2012".to_string(),
                end_date: Some("2016".to_string()),
            },
        ],
        skills: ["JavaScript", "React", "Node.js", "Python", "AWS", "Docker"]
            .into_iter()
            .map(String::from)
            .collect(),
        websites: vec![
            Website {
                name: "Personal Website".to_string(),
                url: "https://johndoe.com".to_string(),
            },
            Website {
                name: "GitHub".to_string(),
                url: "https://github.com/johndoe".to_string(),
            },
        ],
        ..Profile::default()
    }
}

pub fn analytics() -> Analytics {
    let point = |date: &str, likes, comments, shares| EngagementPoint {
        date: date.to_string(),
        likes,
        comments,
        shares,
    };
    let perf = |post: &str, likes, comments, shares| PostPerformance {
        post: post.to_string(),
        likes,
        comments,
        shares,
    };
    let slice = |name: &str, value| DistributionSlice {
        name: name.to_string(),
        value,
    };

    Analytics {
        total_posts: 15,
        total_likes: 2345,
        total_comments: 456,
        total_shares: 234,
        engagement_over_time: vec![
            point("2024-03-01", 120, 25, 10),
            point("2024-03-02", 145, 30, 15),
            point("2024-03-03", 180, 35, 20),
            point("2024-03-04", 160, 28, 18),
            point("2024-03-05", 200, 40, 25),
        ],
        post_performance: vec![
            perf("Post 1", 245, 56, 23),
            perf("Post 2", 189, 34, 12),
            perf("Post 3", 312, 78, 45),
            perf("Post 4", 278, 45, 30),
            perf("Post 5", 345, 67, 38),
        ],
        engagement_distribution: vec![
            slice("Likes", 2345),
            slice("Comments", 456),
            slice("Shares", 234),
        ],
    }
}
