//! Ready to use [`NamedNodeRef`](oxrdf::NamedNodeRef)s for the vocabularies the baseline schema is written in.
//!
//! RDF, RDFS and XSD terms are provided by [`oxrdf::vocab`].

pub mod activitystreams {
    //! [Activity Streams 2.0](https://www.w3.org/TR/activitystreams-vocabulary/) classes.
    use oxrdf::NamedNodeRef;

    /// The `Accept` class.
    pub const ACCEPT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Accept");
    /// The `Achieve` class.
    pub const ACHIEVE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Achieve");
    /// Something that has happened or may happen, the root of the activity classes.
    pub const ACTIVITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Activity");
    /// The `ActivityHandler` class.
    pub const ACTIVITY_HANDLER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#ActivityHandler");
    /// The `Actor` class.
    pub const ACTOR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Actor");
    /// The `Add` class.
    pub const ADD: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Add");
    /// The `Album` class.
    pub const ALBUM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Album");
    /// The `Announce` class.
    pub const ANNOUNCE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Announce");
    /// The `Application` class.
    pub const APPLICATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Application");
    /// The `Arrive` class.
    pub const ARRIVE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Arrive");
    /// The `Article` class.
    pub const ARTICLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Article");
    /// The `Assign` class.
    pub const ASSIGN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Assign");
    /// The `Audio` class.
    pub const AUDIO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Audio");
    /// The `Block` class.
    pub const BLOCK: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Block");
    /// The `BrowserView` class.
    pub const BROWSER_VIEW: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#BrowserView");
    /// The `Collection` class.
    pub const COLLECTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Collection");
    /// The `Complete` class.
    pub const COMPLETE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Complete");
    /// The `Confirm` class.
    pub const CONFIRM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Confirm");
    /// The `Connect` class.
    pub const CONNECT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Connect");
    /// The `Content` class.
    pub const CONTENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Content");
    /// The `Create` class.
    pub const CREATE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Create");
    /// The `Delete` class.
    pub const DELETE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Delete");
    /// The `Device` class.
    pub const DEVICE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Device");
    /// The `Dislike` class.
    pub const DISLIKE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Dislike");
    /// The `Document` class.
    pub const DOCUMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Document");
    /// The `EmbeddedView` class.
    pub const EMBEDDED_VIEW: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#EmbeddedView");
    /// The `Event` class.
    pub const EVENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Event");
    /// The `Experience` class.
    pub const EXPERIENCE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Experience");
    /// The `Favorite` class.
    pub const FAVORITE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Favorite");
    /// The `Flag` class.
    pub const FLAG: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Flag");
    /// The `Folder` class.
    pub const FOLDER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Folder");
    /// The `Follow` class.
    pub const FOLLOW: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Follow");
    /// The `FriendRequest` class.
    pub const FRIEND_REQUEST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#FriendRequest");
    /// The `Give` class.
    pub const GIVE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Give");
    /// The `Group` class.
    pub const GROUP: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Group");
    /// The `HttpHeader` class.
    pub const HTTP_HEADER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#HttpHeader");
    /// The `HttpRequest` class.
    pub const HTTP_REQUEST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#HttpRequest");
    /// The `Ignore` class.
    pub const IGNORE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Ignore");
    /// The `Image` class.
    pub const IMAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Image");
    /// Activities without an `object`, like `Arrive` or `Travel`.
    pub const INTRANSITIVE_ACTIVITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#IntransitiveActivity");
    /// The `Invite` class.
    pub const INVITE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Invite");
    /// The `Join` class.
    pub const JOIN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Join");
    /// The `Leave` class.
    pub const LEAVE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Leave");
    /// The `Like` class.
    pub const LIKE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Like");
    /// A qualified reference to a resource.
    ///
    /// Every class that is not a subclass of this one is an object class.
    pub const LINK: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Link");
    /// The `Listen` class.
    pub const LISTEN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Listen");
    /// The `Mention` class.
    pub const MENTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Mention");
    /// The `Move` class.
    pub const MOVE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Move");
    /// The `Note` class.
    pub const NOTE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Note");
    /// The root of the object classes.
    pub const OBJECT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Object");
    /// The `Offer` class.
    pub const OFFER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Offer");
    /// The `OrderedCollection` class.
    pub const ORDERED_COLLECTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#OrderedCollection");
    /// The `Organization` class.
    pub const ORGANIZATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Organization");
    /// The `Page` class.
    pub const PAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Page");
    /// The `Person` class.
    pub const PERSON: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Person");
    /// The `Place` class.
    pub const PLACE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Place");
    /// The `PossibleAnswer` class.
    pub const POSSIBLE_ANSWER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#PossibleAnswer");
    /// The `Post` class.
    pub const POST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Post");
    /// The `Process` class.
    pub const PROCESS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Process");
    /// The `Profile` class.
    pub const PROFILE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Profile");
    /// The `Question` class.
    pub const QUESTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Question");
    /// The `Read` class.
    pub const READ: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Read");
    /// The `Reject` class.
    pub const REJECT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Reject");
    /// The `Remove` class.
    pub const REMOVE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Remove");
    /// The `Reservation` class.
    pub const RESERVATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Reservation");
    /// The `Respond` class.
    pub const RESPOND: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Respond");
    /// The `Review` class.
    pub const REVIEW: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Review");
    /// The `Role` class.
    pub const ROLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Role");
    /// The `Save` class.
    pub const SAVE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Save");
    /// The `Service` class.
    pub const SERVICE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Service");
    /// The `Share` class.
    pub const SHARE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Share");
    /// The `Story` class.
    pub const STORY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Story");
    /// The `TentativeAccept` class.
    pub const TENTATIVE_ACCEPT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#TentativeAccept");
    /// The `TentativeReject` class.
    pub const TENTATIVE_REJECT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#TentativeReject");
    /// The `Travel` class.
    pub const TRAVEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Travel");
    /// The `Undo` class.
    pub const UNDO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Undo");
    /// The `Video` class.
    pub const VIDEO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Video");
    /// The `View` class.
    pub const VIEW: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#View");
    /// The `Watch` class.
    pub const WATCH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#Watch");
}

pub mod activitystreams_properties {
    //! [Activity Streams 2.0](https://www.w3.org/TR/activitystreams-vocabulary/) properties.
    use oxrdf::NamedNodeRef;

    /// The `accuracy` property.
    pub const ACCURACY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#accuracy");
    /// The `action` property.
    pub const ACTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#action");
    /// The `actor` property.
    pub const ACTOR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#actor");
    /// The `actorOf` property.
    pub const ACTOR_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#actorOf");
    /// The `alias` property.
    pub const ALIAS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#alias");
    /// The `altitude` property.
    pub const ALTITUDE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#altitude");
    /// The `anyOf` property.
    pub const ANY_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#anyOf");
    /// The `attachedTo` property.
    pub const ATTACHED_TO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#attachedTo");
    /// The `attachment` property.
    pub const ATTACHMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#attachment");
    /// The `attachments` property.
    pub const ATTACHMENTS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#attachments");
    /// Entities an object is attributed to.
    ///
    /// `actor`, `author` and `resultOf` are specializations of it.
    pub const ATTRIBUTED_TO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#attributedTo");
    /// Inverse of `attributedTo`.
    pub const ATTRIBUTED_WITH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#attributedWith");
    /// The `author` property.
    pub const AUTHOR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#author");
    /// The `authorOf` property.
    pub const AUTHOR_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#authorOf");
    /// The `bcc` property.
    pub const BCC: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#bcc");
    /// The `browserContext` property.
    pub const BROWSER_CONTEXT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#browserContext");
    /// The `bto` property.
    pub const BTO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#bto");
    /// The `cc` property.
    pub const CC: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#cc");
    /// The `confirm` property.
    pub const CONFIRM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#confirm");
    /// The `content` property.
    pub const CONTENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#content");
    /// The `context` property.
    pub const CONTEXT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#context");
    /// The `contextOf` property.
    pub const CONTEXT_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#contextOf");
    /// The `current` property.
    pub const CURRENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#current");
    /// The `describes` property.
    pub const DESCRIBES: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#describes");
    /// A language tagged human readable name.
    pub const DISPLAY_NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#displayName");
    /// The `downstreamDuplicates` property.
    pub const DOWNSTREAM_DUPLICATES: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#downstreamDuplicates");
    /// The `duration` property.
    pub const DURATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#duration");
    /// The `endTime` property.
    pub const END_TIME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#endTime");
    /// The `first` property.
    pub const FIRST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#first");
    /// The `generator` property.
    pub const GENERATOR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#generator");
    /// The `generatorOf` property.
    pub const GENERATOR_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#generatorOf");
    /// The `handlerFor` property.
    pub const HANDLER_FOR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#handlerFor");
    /// The `hasExpectedInput` property.
    pub const HAS_EXPECTED_INPUT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#hasExpectedInput");
    /// The `hasPotentialResult` property.
    pub const HAS_POTENTIAL_RESULT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#hasPotentialResult");
    /// The `hasPreference` property.
    pub const HAS_PREFERENCE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#hasPreference");
    /// The `hasRequirement` property.
    pub const HAS_REQUIREMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#hasRequirement");
    /// The `height` property.
    pub const HEIGHT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#height");
    /// The `href` property.
    pub const HREF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#href");
    /// The `hreflang` property.
    pub const HREFLANG: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#hreflang");
    /// The `hreftemplate` property.
    pub const HREFTEMPLATE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#hreftemplate");
    /// The `icon` property.
    pub const ICON: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#icon");
    /// The `iconFor` property.
    pub const ICON_FOR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#iconFor");
    /// Deprecated, use the subject IRI instead.
    pub const ID: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#id");
    /// The `image` property.
    pub const IMAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#image");
    /// The `imageOf` property.
    pub const IMAGE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#imageOf");
    /// The `inReplyTo` property.
    pub const IN_REPLY_TO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#inReplyTo");
    /// The `items` property.
    pub const ITEMS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#items");
    /// The `itemsPerPage` property.
    pub const ITEMS_PER_PAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#itemsPerPage");
    /// The `last` property.
    pub const LAST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#last");
    /// The `latitude` property.
    pub const LATITUDE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#latitude");
    /// The `location` property.
    pub const LOCATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#location");
    /// The `locationOf` property.
    pub const LOCATION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#locationOf");
    /// The `longitude` property.
    pub const LONGITUDE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#longitude");
    /// The `mediaType` property.
    pub const MEDIA_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#mediaType");
    /// The `memberOf` property.
    pub const MEMBER_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#memberOf");
    /// The `method` property.
    pub const METHOD: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#method");
    /// The `name` property.
    pub const NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#name");
    /// The `next` property.
    pub const NEXT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#next");
    /// The `object` property.
    pub const OBJECT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#object");
    /// The `objectOf` property.
    pub const OBJECT_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#objectOf");
    /// The `objectType` property.
    pub const OBJECT_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#objectType");
    /// The `oneOf` property.
    pub const ONE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#oneOf");
    /// The `optional` property.
    pub const OPTIONAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#optional");
    /// The `origin` property.
    pub const ORIGIN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#origin");
    /// The `originOf` property.
    pub const ORIGIN_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#originOf");
    /// The `parameter` property.
    pub const PARAMETER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#parameter");
    /// The `prev` property.
    pub const PREV: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#prev");
    /// The `preview` property.
    pub const PREVIEW: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#preview");
    /// The `previewOf` property.
    pub const PREVIEW_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#previewOf");
    /// The `priority` property.
    pub const PRIORITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#priority");
    /// The `provider` property.
    pub const PROVIDER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#provider");
    /// The `providerOf` property.
    pub const PROVIDER_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#providerOf");
    /// The `published` property.
    pub const PUBLISHED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#published");
    /// The `radius` property.
    pub const RADIUS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#radius");
    /// The `rating` property.
    pub const RATING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#rating");
    /// The `rel` property.
    pub const REL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#rel");
    /// The `replies` property.
    pub const REPLIES: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#replies");
    /// The `result` property.
    pub const RESULT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#result");
    /// The `resultOf` property.
    pub const RESULT_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#resultOf");
    /// The `role` property.
    pub const ROLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#role");
    /// The `sandbox` property.
    pub const SANDBOX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#sandbox");
    /// The `scope` property.
    pub const SCOPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#scope");
    /// The `scopeOf` property.
    pub const SCOPE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#scopeOf");
    /// The `self` property.
    pub const SELF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#self");
    /// The `shape` property.
    pub const SHAPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#shape");
    /// The `startIndex` property.
    pub const START_INDEX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#startIndex");
    /// The `startTime` property.
    pub const START_TIME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#startTime");
    /// The `summary` property.
    pub const SUMMARY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#summary");
    /// The `tag` property.
    pub const TAG: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#tag");
    /// The `tagOf` property.
    pub const TAG_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#tagOf");
    /// The `tags` property.
    pub const TAGS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#tags");
    /// The `target` property.
    pub const TARGET: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#target");
    /// The `targetOf` property.
    pub const TARGET_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#targetOf");
    /// The `template` property.
    pub const TEMPLATE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#template");
    /// The `title` property.
    pub const TITLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#title");
    /// The `to` property.
    pub const TO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#to");
    /// The `totalItems` property.
    pub const TOTAL_ITEMS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#totalItems");
    /// The `units` property.
    pub const UNITS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#units");
    /// The `updated` property.
    pub const UPDATED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#updated");
    /// The `upstreamDuplicates` property.
    pub const UPSTREAM_DUPLICATES: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#upstreamDuplicates");
    /// The `url` property.
    pub const URL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#url");
    /// The `using` property.
    pub const USING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#using");
    /// The `verb` property.
    pub const VERB: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#verb");
    /// The `width` property.
    pub const WIDTH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/activitystreams#width");
}

pub mod asx {
    //! Activity Streams extension terms.
    use oxrdf::NamedNodeRef;

    /// Boolean datatypes.
    pub const BOOLEAN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/asx#Boolean");
    /// Date and date-time datatypes.
    pub const DATE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://ns.jasnell.me/asx#Date");
    /// Properties whose values are language tagged.
    pub const LANGUAGE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/asx#LanguageProperty");
    /// Numeric datatypes.
    pub const NUMBER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/asx#Number");
    /// Properties whose values may be an ordered list.
    pub const POSSIBLY_ORDERED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/asx#PossiblyOrdered");
    /// The `indexRange` property.
    pub const INDEX_RANGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/asx#indexRange");
    /// The `publishedRange` property.
    pub const PUBLISHED_RANGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/asx#publishedRange");
    /// The `startTimeRange` property.
    pub const START_TIME_RANGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/asx#startTimeRange");
}

pub mod owl {
    //! [OWL 2](https://www.w3.org/TR/owl2-overview/) property markers.
    use oxrdf::NamedNodeRef;

    /// The class of OWL classes.
    pub const CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
    /// The class of data properties.
    pub const DATATYPE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DatatypeProperty");
    /// The class of deprecated properties.
    pub const DEPRECATED_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DeprecatedProperty");
    /// The class of functional properties.
    pub const FUNCTIONAL_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#FunctionalProperty");
    /// The class of object properties.
    pub const OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
}

pub mod interval {
    //! Interval vocabulary.
    use oxrdf::NamedNodeRef;

    /// The `ClosedInterval` class.
    pub const CLOSED_INTERVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/interval#ClosedInterval");
    /// The `ClosedOpenInterval` class.
    pub const CLOSED_OPEN_INTERVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/interval#ClosedOpenInterval");
    /// The `Interval` class.
    pub const INTERVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/interval#Interval");
    /// The `LeftClosedInterval` class.
    pub const LEFT_CLOSED_INTERVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/interval#LeftClosedInterval");
    /// The `LeftOpenInterval` class.
    pub const LEFT_OPEN_INTERVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/interval#LeftOpenInterval");
    /// The `OpenClosedInterval` class.
    pub const OPEN_CLOSED_INTERVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/interval#OpenClosedInterval");
    /// The `OpenInterval` class.
    pub const OPEN_INTERVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/interval#OpenInterval");
    /// The `RightClosedInterval` class.
    pub const RIGHT_CLOSED_INTERVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/interval#RightClosedInterval");
    /// The `RightOpenInterval` class.
    pub const RIGHT_OPEN_INTERVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/interval#RightOpenInterval");
    /// The `lower` bound.
    pub const LOWER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/interval#lower");
    /// The `step` bound.
    pub const STEP: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/interval#step");
    /// The `upper` bound.
    pub const UPPER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/interval#upper");
}

pub mod social {
    //! Social audience vocabulary.
    use oxrdf::NamedNodeRef;

    /// The `All` population.
    pub const ALL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#All");
    /// The `Any` population.
    pub const ANY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#Any");
    /// Populations combining other populations.
    pub const COMPOUND_POPULATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#CompoundPopulation");
    /// The `Common` population.
    pub const COMMON: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#Common");
    /// The `Direct` population.
    pub const DIRECT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#Direct");
    /// The `Everyone` population.
    pub const EVERYONE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#Everyone");
    /// The `Interested` population.
    pub const INTERESTED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#Interested");
    /// The `None` population.
    pub const NONE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#None");
    /// The class of audiences.
    pub const POPULATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#Population");
    /// The `Private` population.
    pub const PRIVATE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#Private");
    /// The `Public` population.
    pub const PUBLIC: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#Public");
    /// The `Self` population.
    pub const SELF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#Self");
    /// The `confidence` property.
    pub const CONFIDENCE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#confidence");
    /// The `distance` property.
    pub const DISTANCE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#distance");
    /// The `havingDimension` property.
    pub const HAVING_DIMENSION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#havingDimension");
    /// The `havingRelationship` property.
    pub const HAVING_RELATIONSHIP: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#havingRelationship");
    /// The `havingRole` property.
    pub const HAVING_ROLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#havingRole");
    /// The `member` property.
    pub const MEMBER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://ns.jasnell.me/social#member");
}
