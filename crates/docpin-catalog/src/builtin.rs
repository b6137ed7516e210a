//! Built-in MDN-oriented reference table

use docpin_domain::ReferenceEntry;

const MDN: &str = "https://developer.mozilla.org/en-US/docs";

/// (key, label, path under MDN or absolute URL, description)
const ENTRIES: &[(&str, &str, &str, &str)] = &[
    // JavaScript baselines
    ("javascript-guide", "MDN: JavaScript Guide", "/Web/JavaScript/Guide", "Overview of the JavaScript language and its core features"),
    ("js-first-steps", "MDN: JavaScript First Steps", "/Learn/JavaScript/First_steps", "Beginner walkthrough of variables, math, strings and arrays"),
    ("js-data-structures", "MDN: JavaScript Data Types and Structures", "/Web/JavaScript/Data_structures", "Built-in types and data structures available in JavaScript"),
    // JavaScript topics
    ("array", "MDN: Array", "/Web/JavaScript/Reference/Global_Objects/Array", "Complete reference for JavaScript arrays and their methods"),
    ("string", "MDN: String", "/Web/JavaScript/Reference/Global_Objects/String", "Reference for string manipulation methods"),
    ("object", "MDN: Object", "/Web/JavaScript/Reference/Global_Objects/Object", "Working with objects, properties and prototypes"),
    ("functions", "MDN: Functions", "/Web/JavaScript/Guide/Functions", "Defining and calling functions, callbacks and scope"),
    ("arrow-functions", "MDN: Arrow Function Expressions", "/Web/JavaScript/Reference/Functions/Arrow_functions", "Compact function syntax and its binding rules"),
    ("loops", "MDN: Loops and Iteration", "/Web/JavaScript/Guide/Loops_and_iteration", "for, while, do...while and for...of loops"),
    ("conditionals", "MDN: if...else", "/Web/JavaScript/Reference/Statements/if...else", "Conditional execution with if and else"),
    ("switch", "MDN: switch", "/Web/JavaScript/Reference/Statements/switch", "Branching on a value with switch statements"),
    ("math", "MDN: Math", "/Web/JavaScript/Reference/Global_Objects/Math", "Mathematical constants and functions"),
    ("number", "MDN: Number", "/Web/JavaScript/Reference/Global_Objects/Number", "Numeric values, parsing and formatting"),
    ("recursion", "MDN: Recursion", "/Glossary/Recursion", "Functions that call themselves"),
    ("closures", "MDN: Closures", "/Web/JavaScript/Closures", "How functions capture their surrounding scope"),
    ("classes", "MDN: Classes", "/Web/JavaScript/Reference/Classes", "Class syntax, constructors and inheritance"),
    ("promise", "MDN: Promise", "/Web/JavaScript/Reference/Global_Objects/Promise", "Representing the eventual result of an asynchronous operation"),
    ("async-await", "MDN: async function", "/Web/JavaScript/Reference/Statements/async_function", "Writing asynchronous code with async and await"),
    ("json", "MDN: JSON", "/Web/JavaScript/Reference/Global_Objects/JSON", "Parsing and serializing JSON"),
    ("dom", "MDN: Document Object Model", "/Web/API/Document_Object_Model", "Reading and changing the page structure from scripts"),
    ("events", "MDN: addEventListener", "/Web/API/EventTarget/addEventListener", "Reacting to user and browser events"),
    ("fetch", "MDN: Fetch API", "/Web/API/Fetch_API", "Making HTTP requests from the browser"),
    ("regexp", "MDN: Regular Expressions", "/Web/JavaScript/Guide/Regular_expressions", "Pattern matching in strings"),
    ("date", "MDN: Date", "/Web/JavaScript/Reference/Global_Objects/Date", "Working with dates and times"),
    ("set", "MDN: Set", "/Web/JavaScript/Reference/Global_Objects/Set", "Collections of unique values"),
    ("map-object", "MDN: Map", "/Web/JavaScript/Reference/Global_Objects/Map", "Key-value collections that remember insertion order"),
    ("destructuring", "MDN: Destructuring Assignment", "/Web/JavaScript/Reference/Operators/Destructuring_assignment", "Unpacking values from arrays and objects"),
    ("spread", "MDN: Spread Syntax", "/Web/JavaScript/Reference/Operators/Spread_syntax", "Expanding iterables into arguments and literals"),
    ("template-literals", "MDN: Template Literals", "/Web/JavaScript/Reference/Template_literals", "String interpolation with backticks"),
    ("error-handling", "MDN: try...catch", "/Web/JavaScript/Reference/Statements/try...catch", "Throwing and handling exceptions"),
    // JavaScript methods
    ("array-map", "MDN: Array.prototype.map()", "/Web/JavaScript/Reference/Global_Objects/Array/map", "Transforming every element of an array"),
    ("array-filter", "MDN: Array.prototype.filter()", "/Web/JavaScript/Reference/Global_Objects/Array/filter", "Keeping the elements that pass a test"),
    ("array-reduce", "MDN: Array.prototype.reduce()", "/Web/JavaScript/Reference/Global_Objects/Array/reduce", "Folding an array into a single value"),
    ("array-sort", "MDN: Array.prototype.sort()", "/Web/JavaScript/Reference/Global_Objects/Array/sort", "Sorting array elements in place"),
    ("array-foreach", "MDN: Array.prototype.forEach()", "/Web/JavaScript/Reference/Global_Objects/Array/forEach", "Running a callback for each element"),
    ("array-find", "MDN: Array.prototype.find()", "/Web/JavaScript/Reference/Global_Objects/Array/find", "Returning the first element that matches"),
    ("array-includes", "MDN: Array.prototype.includes()", "/Web/JavaScript/Reference/Global_Objects/Array/includes", "Checking whether an array contains a value"),
    ("string-split", "MDN: String.prototype.split()", "/Web/JavaScript/Reference/Global_Objects/String/split", "Splitting a string into an array of substrings"),
    ("string-replace", "MDN: String.prototype.replace()", "/Web/JavaScript/Reference/Global_Objects/String/replace", "Replacing matches within a string"),
    ("object-keys", "MDN: Object.keys()", "/Web/JavaScript/Reference/Global_Objects/Object/keys", "Listing an object's own property names"),
    ("object-entries", "MDN: Object.entries()", "/Web/JavaScript/Reference/Global_Objects/Object/entries", "Listing an object's own key-value pairs"),
    ("sorting-visualizer", "VisuAlgo: Sorting", "https://visualgo.net/en/sorting", "Animated walkthroughs of classic sorting algorithms"),
    // HTML
    ("html-basics", "MDN: Getting Started with HTML", "/Learn/HTML/Introduction_to_HTML/Getting_started", "Elements, attributes and the anatomy of an HTML document"),
    ("html-elements", "MDN: HTML Elements Reference", "/Web/HTML/Element", "Every HTML element with usage notes"),
    ("html-document-structure", "MDN: Document and Website Structure", "/Learn/HTML/Introduction_to_HTML/Document_and_website_structure", "Headers, footers, navigation and main content areas"),
    ("html-semantics", "MDN: Semantics in HTML", "/Glossary/Semantics", "Choosing elements for their meaning rather than their look"),
    ("html-forms", "MDN: Web Forms", "/Learn/Forms", "Building and structuring forms"),
    ("html-input", "MDN: The Input element", "/Web/HTML/Element/input", "Input types and their attributes"),
    ("html-table", "MDN: HTML Table Basics", "/Learn/HTML/Tables/Basics", "Rows, cells and headers in tabular data"),
    ("html-lists", "MDN: HTML Text Fundamentals", "/Learn/HTML/Introduction_to_HTML/HTML_text_fundamentals", "Headings, paragraphs and lists"),
    ("html-links", "MDN: Creating Hyperlinks", "/Learn/HTML/Introduction_to_HTML/Creating_hyperlinks", "Anchors, URLs and link targets"),
    ("html-images", "MDN: Images in HTML", "/Learn/HTML/Multimedia_and_embedding/Images_in_HTML", "Embedding images with alternative text"),
    ("html-media", "MDN: Video and Audio Content", "/Learn/HTML/Multimedia_and_embedding/Video_and_audio_content", "Embedding audio and video players"),
    ("html-metadata", "MDN: Metadata in HTML", "/Learn/HTML/Introduction_to_HTML/The_head_metadata_in_HTML", "The head element, titles and meta tags"),
    ("html-accessibility", "MDN: HTML Accessibility", "/Learn/Accessibility/HTML", "Accessible markup and ARIA basics"),
    // CSS
    ("css-basics", "MDN: CSS First Steps", "/Learn/CSS/First_steps", "How CSS rules, selectors and declarations work"),
    ("css-reference", "MDN: CSS Reference", "/Web/CSS/Reference", "Index of CSS properties, selectors and at-rules"),
    ("css-selectors", "MDN: CSS Selectors", "/Web/CSS/CSS_selectors", "Targeting elements with selectors and combinators"),
    ("css-box-model", "MDN: The Box Model", "/Learn/CSS/Building_blocks/The_box_model", "Content, padding, border and margin"),
    ("css-flexbox", "MDN: Flexbox", "/Learn/CSS/CSS_layout/Flexbox", "One-dimensional layout with flex containers"),
    ("css-grid", "MDN: Grids", "/Learn/CSS/CSS_layout/Grids", "Two-dimensional layout with CSS grid"),
    ("css-positioning", "MDN: Positioning", "/Learn/CSS/CSS_layout/Positioning", "Relative, absolute, fixed and sticky positioning"),
    ("css-media-queries", "MDN: Media Queries", "/Learn/CSS/CSS_layout/Media_queries", "Responsive styles for different screens"),
    ("css-colors", "MDN: color value", "/Web/CSS/color_value", "Color keywords, RGB, HSL and gradients"),
    ("css-typography", "MDN: Fundamental Text and Font Styling", "/Learn/CSS/Styling_text/Fundamentals", "Fonts, sizes and text layout"),
    ("css-backgrounds", "MDN: Backgrounds and Borders", "/Learn/CSS/Building_blocks/Backgrounds_and_borders", "Background images, borders and shadows"),
    ("css-variables", "MDN: Using CSS Custom Properties", "/Web/CSS/Using_CSS_custom_properties", "Reusable values with custom properties"),
    ("css-pseudo-classes", "MDN: Pseudo-classes", "/Web/CSS/Pseudo-classes", "Styling states such as hover and focus"),
    ("css-transitions", "MDN: Using CSS Transitions", "/Web/CSS/CSS_transitions/Using_CSS_transitions", "Animating property changes smoothly"),
    ("css-animations", "MDN: Using CSS Animations", "/Web/CSS/CSS_animations/Using_CSS_animations", "Keyframe animations"),
    ("css-transform", "MDN: transform", "/Web/CSS/transform", "Rotating, scaling and translating elements"),
];

/// The built-in entries in declaration order
pub fn builtin_entries() -> Vec<ReferenceEntry> {
    ENTRIES
        .iter()
        .map(|(key, label, path, description)| {
            let url = if path.starts_with("http") {
                path.to_string()
            } else {
                format!("{MDN}{path}")
            };
            ReferenceEntry::new(*key, *label, url, *description)
        })
        .collect()
}
