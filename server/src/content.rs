//! Built-in policy content
//!
//! The table below is the entire content store. Section bodies are
//! operator-authored HTML served to the viewer verbatim; keep new entries to
//! markup you would be happy to inject into a page unescaped.
//!
//! To publish a policy for a new product, add an entry here. The id becomes
//! the lookup key and the URL path segment.

use policy_model::{PolicyDocument, PolicySection};

use crate::registry::PolicyRegistry;

/// Build the registry served by this process.
pub fn builtin_policies() -> PolicyRegistry {
    let mut registry = PolicyRegistry::new();
    registry.insert("searchit", searchit_policy());
    registry
}

fn searchit_policy() -> PolicyDocument {
    PolicyDocument {
        title: "Privacy Policy for SearchIt (Select To Search)".to_string(),
        effective_date: "September 14, 2025".to_string(),
        sections: vec![
            PolicySection {
                title: "Introduction".to_string(),
                content: r#"
Thank you for using our browser extension. This policy outlines how we handle your data for our different features. Our goal is to be fully transparent and to protect your privacy.<br/><br/>
We offer two main features, and they handle your data differently:
<ol>
  <li><b>Standard AI Analysis:</b> Direct, private analysis of an image and prompt.</li>
  <li><b>Google Lens Search:</b> A search feature that requires making your image temporarily public.</li>
</ol>
"#
                .to_string(),
            },
            PolicySection {
                title: "1. Information We Collect".to_string(),
                content: r#"
For both features, the extension only handles the data you voluntarily provide for a specific task:
<ul>
  <li><b>Image Data:</b> The image file you select.</li>
  <li><b>Text Prompts:</b> The text-based question you provide (for Standard AI Analysis).</li>
</ul>
"#
                .to_string(),
            },
            PolicySection {
                title: "2. How Your Information is Used and Handled".to_string(),
                content: r#"
How we process your data depends entirely on the feature you choose to use.
<h4>A. For Standard AI Analysis</h4>
This is the default analysis feature. When you use it, your privacy is maximized.
<ul>
  <li><b>Direct Processing:</b> Your image and text prompt are sent directly and securely to our backend API.</li>
  <li><b>No Third-Party Hosting:</b> In this flow, your image is <b>never</b> uploaded to a public third-party image host. It is processed in-memory by our backend service and then immediately discarded.</li>
  <li><b>Owner Access:</b> As the extension owner, I have no access to the images or prompts you submit through this feature.</li>
</ul>
<h4>B. For Google Lens Search (Only when you click the Google Search icon)</h4>
This is a special feature that requires a different data flow.
<ul>
  <li><b>Temporary Public Hosting:</b> To allow Google's service to "see" your image, the extension first uploads your selected image to <b>ImgBB</b>. This creates a temporary, public URL for the image.</li>
  <li><b>Search Execution:</b> This public URL is then used to perform the Google Lens search.</li>
  <li><b>Data Retention:</b> The uploaded image is subject to ImgBB's terms of service and privacy policy regarding how long it is stored.</li>
  <li><b>Owner Access:</b> As the extension owner, I do not have access to your original image file. My access is limited to potentially seeing the public ImgBB URL that is generated for the search.</li>
</ul>
"#
                .to_string(),
            },
            PolicySection {
                title: "3. Third-Party Services".to_string(),
                content: r#"
Our extension uses the following third-party services:
<ul>
  <li><b>Cloudflare:</b> Used for <b>all</b> backend processing and AI analysis for the Standard AI Analysis feature. It provides a secure environment where your data is processed and immediately discarded.</li>
  <li><b>ImgBB:</b> Used <b>only when you explicitly click the Google Lens Search icon</b>. Its sole purpose is to temporarily host your image. We recommend you review ImgBB's Privacy Policy to understand how they handle data.</li>
</ul>
"#
                .to_string(),
            },
            PolicySection {
                title: "4. Contact Us".to_string(),
                content: r#"If you have any questions about this Privacy Policy, please contact us at <a href="mailto:vididvidid@gmail.com">vididvidid@gmail.com</a>."#
                    .to_string(),
            },
        ],
    }
}
